use anyhow::{bail, Context};
use std::process::ExitCode;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::logging::init_logging;
use crate::config::Settings;
use crate::converters::{CoordinateForm, DmsConverter, DmsFields};
use crate::models::{ConversionResult, Hemisphere, CRS_REGISTRY};

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging(cli.verbose, cli.log_file.as_deref(), cli.log_json)
        .context("Failed to initialise logging")?;

    match cli.command {
        Commands::Convert {
            country,
            from,
            to,
            x,
            y,
        } => {
            let settings =
                Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
            let country = country.unwrap_or(settings.default_country);
            let source = from.unwrap_or(settings.default_source_crs);
            let target = to.unwrap_or(settings.default_target_crs);
            debug!(country = country.key(), %source, %target, "Running convert command");

            let mut form = CoordinateForm::new(country, &source, &target);
            form.ordinate1 = x;
            form.ordinate2 = y;

            emit(form.convert(), cli.json)
        }

        Commands::ToDms {
            latitude,
            longitude,
        } => {
            let mut converter = DmsConverter::new();
            converter.decimal_latitude = latitude;
            converter.decimal_longitude = longitude;

            emit(converter.convert(), cli.json)
        }

        Commands::ToDecimal { lat, lon } => {
            let mut converter = DmsConverter::new();
            converter.switch_mode();
            converter.latitude = dms_fields(&lat).context("Invalid --lat value")?;
            converter.longitude = dms_fields(&lon).context("Invalid --lon value")?;

            emit(converter.convert(), cli.json)
        }

        Commands::ListCrs => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&CRS_REGISTRY)?);
            } else {
                println!("{:<12} {:<20} {:<9} Definition", "Id", "Label", "Datum");
                for crs in CRS_REGISTRY.iter() {
                    println!(
                        "{:<12} {:<20} {:<9} {}",
                        crs.id,
                        crs.label,
                        crs.datum.to_string(),
                        crs.definition
                    );
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Build DMS fields from `DEG MIN SEC HEMISPHERE` command-line values
fn dms_fields(values: &[String]) -> anyhow::Result<DmsFields> {
    let [degrees, minutes, seconds, hemisphere] = values else {
        bail!("expected DEG MIN SEC HEMISPHERE, got {} values", values.len());
    };
    let hemisphere: Hemisphere = hemisphere.parse()?;

    Ok(DmsFields::new(degrees, minutes, seconds, hemisphere))
}

fn emit(result: &ConversionResult, json: bool) -> anyhow::Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.is_success() {
        println!("{}", render(result));
    } else {
        eprintln!("{}", render(result));
    }

    Ok(exit_code(result))
}

/// Process exit status for a conversion: failure results exit non-zero
pub fn exit_code(result: &ConversionResult) -> ExitCode {
    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Human-readable summary of a result
pub fn render(result: &ConversionResult) -> String {
    if !result.is_success() {
        return format!("Conversion Error: {}", result.output());
    }

    let mut out = match result.context() {
        Some(context) => format!(
            "Conversion Results\n\
             Input ({}): {}\n\
             Output ({}): {}\n\
             Country: {}\n\
             From: {} → To: {}",
            context.source_crs,
            result.input(),
            context.target_crs,
            result.output(),
            context.country,
            context.source_crs,
            context.target_crs
        ),
        None => format!(
            "Conversion Results\nInput: {}\nOutput: {}",
            result.input(),
            result.output()
        ),
    };

    if let Some(note) = result.note() {
        out.push('\n');
        out.push_str(note);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::{convert, convert_decimal_to_dms};
    use crate::models::Country;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_crs_success() {
        let result = convert(Country::SouthSudan, "EPSG:32636", "EPSG:32636", "500000", "0");
        assert_eq!(
            render(&result),
            "Conversion Results\n\
             Input (EPSG:32636): 500000, 0\n\
             Output (EPSG:32636): 500000.000000, 0.000000\n\
             Country: South Sudan\n\
             From: EPSG:32636 → To: EPSG:32636\n\
             No conversion needed - same coordinate system"
        );
    }

    #[test]
    fn test_render_dms_success() {
        let result = convert_decimal_to_dms("-1.5", "30.25");
        assert_eq!(
            render(&result),
            "Conversion Results\n\
             Input: -1.5°, 30.25°\n\
             Output: 1° 30' 0.0000\" S, 30° 15' 0.0000\" E\n\
             Decimal degrees converted to degrees-minutes-seconds format"
        );
    }

    #[test]
    fn test_render_error() {
        let result = convert_decimal_to_dms("", "");
        assert_eq!(
            render(&result),
            "Conversion Error: Please enter both latitude and longitude in decimal degrees."
        );
    }

    #[test]
    fn test_exit_code_follows_result() {
        let success = convert_decimal_to_dms("0.5", "32.5");
        let failure = convert_decimal_to_dms("95", "32.5");

        assert_eq!(
            format!("{:?}", exit_code(&success)),
            format!("{:?}", ExitCode::SUCCESS)
        );
        assert_eq!(
            format!("{:?}", exit_code(&failure)),
            format!("{:?}", ExitCode::FAILURE)
        );
        assert_ne!(
            format!("{:?}", exit_code(&success)),
            format!("{:?}", exit_code(&failure))
        );
    }

    #[test]
    fn test_dms_fields_from_args() {
        let values: Vec<String> = ["0", "20", "51.3456", "n"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let fields = dms_fields(&values).unwrap();
        assert_eq!(fields, DmsFields::new("0", "20", "51.3456", Hemisphere::North));

        let bad: Vec<String> = vec!["0".into(), "20".into(), "51".into(), "Q".into()];
        assert!(dms_fields(&bad).is_err());
        assert!(dms_fields(&values[..3]).is_err());
    }
}
