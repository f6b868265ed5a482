use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use sf_api::{ApiError, DesignRequest, DesignResponse, run_design};
use sf_props::{BuiltinStore, PackingKind, PropertyStore, SpeciesCategory};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "sf-cli")]
#[command(about = "ScrubFlow CLI - packed-column gas scrubber design tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scrubber design from a JSON request file
    Design {
        /// Path to the design request JSON file
        request_path: PathBuf,
        /// Print the full response as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List species in the property registry
    Species {
        /// Filter by category: acid, carrier, or solvent
        #[arg(long)]
        category: Option<String>,
        /// Substring search over id, name, and formula
        #[arg(long)]
        search: Option<String>,
    },
    /// List packings in the property registry
    Packings {
        /// Filter by kind: random or structured
        #[arg(long)]
        kind: Option<String>,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("Failed to read request file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown {what} filter '{value}'")]
    UnknownFilter { what: &'static str, value: String },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Design { request_path, json } => cmd_design(&request_path, json),
        Commands::Species { category, search } => cmd_species(category.as_deref(), search.as_deref()),
        Commands::Packings { kind } => cmd_packings(kind.as_deref()),
    }
}

fn cmd_design(request_path: &Path, as_json: bool) -> Result<(), CliError> {
    let raw = fs::read_to_string(request_path)?;
    let request: DesignRequest = serde_json::from_str(&raw)?;

    let store = BuiltinStore::new();
    let response = run_design(&store, &request)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }
    print_summary(&response);
    Ok(())
}

fn print_summary(r: &DesignResponse) {
    if r.solve.converged {
        println!("✓ Solve converged ({} iterations)", r.solve.iterations);
    } else {
        println!("✗ Solve did NOT converge; best estimate follows");
    }
    println!("  Mode: solve for {} → {:.4}", r.solve.mode, r.solve.value);
    println!("  Solvent: {} | Packing: {}", r.solvent, r.packing);
    println!(
        "  Column: D = {:.0} mm, A = {:.3} m², Z = {:.2} m",
        r.column.diameter_mm, r.column.area_m2, r.column.packed_height_m
    );
    println!(
        "  Hydraulics: u_design = {:.2} m/s ({:.0}% of flooding), ΔP = {:.1} mbar",
        r.column.design_velocity_m_s,
        r.column.flooding_fraction * 100.0,
        r.column.dp_total_mbar
    );
    if !r.column.wetting_adequate {
        println!("  ⚠ liquid load below the minimum wetting rate");
    }
    println!(
        "  Controlling species: {} ({:.1}% removal achieved)",
        r.controlling_species, r.target_removal_pct
    );
    for s in &r.species {
        let cap = if s.removal_capped { " [capped: A < 1]" } else { "" };
        println!(
            "    {:<5} m = {:.4}  A = {:.3}  NTU = {:.2}  H_OG = {:.3} m  Z_req = {:.2} m{}",
            s.id, s.m_slope, s.absorption_factor, s.ntu, s.h_og_m, s.required_height_m, cap
        );
    }
    println!("  Exit gas:");
    for e in &r.exit_gas {
        println!(
            "    {:<5} in {:6.2}%  out {:6.2}%  removed {:5.1}%",
            e.id, e.inlet_mol_pct, e.outlet_mol_pct, e.removal_pct
        );
    }
    println!("  Total absorbed: {:.4} mol/s", r.total_absorbed_mol_s);
}

fn cmd_species(category: Option<&str>, search: Option<&str>) -> Result<(), CliError> {
    let store = BuiltinStore::new();
    let filter = match category {
        None => None,
        Some(c) => Some(parse_category(c)?),
    };
    let species = match search {
        Some(query) => store.search_species(query),
        None => store.list_species(filter),
    };
    if species.is_empty() {
        println!("No matching species");
        return Ok(());
    }
    println!("{:<6} {:<22} {:<10} {:>9}  category", "id", "name", "formula", "MW g/mol");
    for s in species {
        println!(
            "{:<6} {:<22} {:<10} {:>9.3}  {}",
            s.id,
            s.name,
            s.formula,
            s.molar_mass,
            category_label(s.category)
        );
    }
    Ok(())
}

fn cmd_packings(kind: Option<&str>) -> Result<(), CliError> {
    let store = BuiltinStore::new();
    let filter = match kind {
        None => None,
        Some(k) => Some(parse_kind(k)?),
    };
    println!(
        "{:<22} {:<11} {:>8} {:>6} {:>6} {:>6}",
        "name", "kind", "a m²/m³", "ε", "Fp", "HETP"
    );
    for p in store.list_packings(filter) {
        println!(
            "{:<22} {:<11} {:>8.0} {:>6.2} {:>6.0} {:>6.2}",
            p.name,
            kind_label(p.kind),
            p.specific_area,
            p.void_fraction,
            p.packing_factor,
            p.hetp
        );
    }
    Ok(())
}

fn parse_category(value: &str) -> Result<SpeciesCategory, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "acid" | "acid_gas" => Ok(SpeciesCategory::AcidGas),
        "carrier" | "carrier_gas" => Ok(SpeciesCategory::CarrierGas),
        "solvent" => Ok(SpeciesCategory::Solvent),
        _ => Err(CliError::UnknownFilter { what: "category", value: value.to_string() }),
    }
}

fn parse_kind(value: &str) -> Result<PackingKind, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "random" => Ok(PackingKind::Random),
        "structured" => Ok(PackingKind::Structured),
        _ => Err(CliError::UnknownFilter { what: "kind", value: value.to_string() }),
    }
}

fn category_label(category: SpeciesCategory) -> &'static str {
    match category {
        SpeciesCategory::AcidGas => "acid gas",
        SpeciesCategory::CarrierGas => "carrier",
        SpeciesCategory::Solvent => "solvent",
    }
}

fn kind_label(kind: PackingKind) -> &'static str {
    match kind {
        PackingKind::Random => "random",
        PackingKind::Structured => "structured",
    }
}
