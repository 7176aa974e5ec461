use clap::Args;
use cloud_inventory_aws::AwsProvider;
use cloud_inventory_core::{
    InstanceSource, InventoryError, InventoryService, OutputFormat, Region, Result, render,
};
use std::io::{self, Write};
use std::sync::Arc;

/// Options of the `ec2` subcommand
///
/// Region selection and the format are validated by [`run`] rather than by
/// clap, so mistakes are reported with the inventory error labels.
#[derive(Debug, Clone, Default, Args)]
pub struct Ec2Args {
    /// Region where the EC2 instances reside
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Search all supported regions for instances
    #[arg(long)]
    pub all_regions: bool,

    /// AWS CLI profile name
    #[arg(long, value_name = "PROFILE", env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Output format: table (default), json, csv
    #[arg(long, value_name = "FORMAT", env = "CLOUD_INVENTORY_FORMAT")]
    pub format: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Target {
    Single(Region),
    All(Vec<Region>),
}

fn resolve_target(region: Option<&str>, all_regions: bool) -> Result<Target> {
    match (region, all_regions) {
        (Some(_), true) => Err(InventoryError::Option(
            "--region and --all-regions cannot be used together".to_string(),
        )),
        (None, false) => Err(InventoryError::Option(
            "either --region or --all-regions must be specified".to_string(),
        )),
        (Some(name), false) => Region::parse(name).map(Target::Single),
        (None, true) => Ok(Target::All(Region::all())),
    }
}

/// Validate the options, query `source` and render the result.
///
/// Every option is checked before the first remote call.
pub async fn run(source: Arc<dyn InstanceSource>, args: &Ec2Args) -> Result<String> {
    let target = resolve_target(args.region.as_deref(), args.all_regions)?;
    let format = match args.format.as_deref() {
        Some(name) => name.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let service = InventoryService::new(source, args.profile.clone());
    let records = match target {
        Target::Single(region) => {
            tracing::info!("Listing instances in {}", region);
            service.list_instances(&region).await?
        }
        Target::All(regions) => {
            tracing::info!("Listing instances in {} regions", regions.len());
            service.list_all_regions(&regions).await?
        }
    };

    tracing::info!("Rendering {} instance(s) as {}", records.len(), format);
    render(&records, format)
}

/// Write the rendered output and a trailing newline.
///
/// A reader that closed the pipe early (`| head`) is not an error.
fn write_output<W: Write>(out: &mut W, output: &str) -> Result<()> {
    match writeln!(out, "{}", output).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed before the output was written");
            Ok(())
        }
        Err(e) => Err(InventoryError::Generic(format!(
            "failed to write output: {}",
            e
        ))),
    }
}

pub async fn handle(args: Ec2Args) -> Result<()> {
    let output = run(Arc::new(AwsProvider::new()), &args).await?;
    write_output(&mut io::stdout().lock(), &output)
}
