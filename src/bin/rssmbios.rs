use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use smbios::{EntryPoint, Inventory, Version};
use tracing_subscriber::EnvFilter;

/// Prints the hardware inventory published in the SMBIOS table.
#[derive(Parser)]
#[command(author, about, long_about = None)]
struct Cli {
    /// Read the entry point from this file instead of detecting it
    #[arg(long, value_name = "PATH", requires = "table")]
    entry_point: Option<PathBuf>,

    /// Read the structure table from this file instead of detecting it
    #[arg(long, value_name = "PATH", requires = "entry_point")]
    table: Option<PathBuf>,

    /// Decode as this SMBIOS version instead of the entry point's
    #[arg(long, value_name = "MAJOR.MINOR[.REV]")]
    version: Option<Version>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (entry_point, structures) = match (&cli.entry_point, &cli.table) {
        (Some(entry_point), Some(table)) => smbios::stream_from(entry_point, table)
            .with_context(|| format!("failed to read SMBIOS table from {}", table.display()))?,
        _ => smbios::stream().context("failed to detect SMBIOS table")?,
    };

    let version = cli.version.unwrap_or_else(|| entry_point.version());
    let inventory = smbios::decode(&structures, version);

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&inventory)?),
        Format::Text => show_text(&entry_point, version, &inventory),
    }

    Ok(())
}

fn show_text(entry_point: &EntryPoint, version: Version, inventory: &Inventory) {
    let (address, size) = entry_point.table();
    println!("SMBIOS {}", version);
    println!("  table: {} bytes, address: {:#010x}", size, address);

    let bios = &inventory.bios_information;
    println!("BIOS:");
    println!("  vendor: {}", bios.vendor);
    println!("  version: {}", bios.version);
    println!("  release date: {}", bios.release_date);

    let system = &inventory.system_information;
    println!("System:");
    println!("  manufacturer: {}", system.manufacturer);
    println!("  product: {}", system.product_name);
    println!("  serial: {}", system.serial_number);
    match system.uuid {
        Some(uuid) => println!("  uuid: {}", uuid),
        None => println!("  uuid: unavailable"),
    }
    println!("  wake-up type: {}", system.wake_up_type);

    let board = &inventory.baseboard_information;
    println!("Baseboard:");
    println!("  manufacturer: {}", board.manufacturer);
    println!("  product: {}", board.product);
    println!("  type: {}", board.board_type);

    println!("Chassis: {}", inventory.system_enclosure.chassis_type);

    for cpu in &inventory.processor_information {
        println!("Processor {}:", cpu.socket_designation);
        println!("  version: {}", cpu.processor_version);
        println!("  status: {}", cpu.status);
        println!("  speed: {} MHz (max {} MHz)", cpu.current_speed, cpu.max_speed);
        println!(
            "  cores: {} ({} enabled), threads: {}",
            cpu.core_count, cpu.core_enabled, cpu.thread_count
        );
    }

    let array = &inventory.physical_memory_array;
    println!("Memory array:");
    println!("  location: {}", array.location);
    println!("  error correction: {}", array.memory_error_correction);
    println!("  maximum capacity: {} GB", array.maximum_capacity_gigabytes());
    println!("  devices: {}", array.number_of_memory_devices);

    for dimm in &inventory.memory_devices {
        print!("DIMM {}: ", dimm.device_locator);
        match dimm.size_megabytes() {
            Some(0) | None => println!("{}", dimm.size),
            Some(mb) => println!(
                "{} MB {} {} {} @ {}",
                mb, dimm.form_factor, dimm.memory_type, dimm.type_detail, dimm.speed
            ),
        }
    }

    println!("Total memory: {} MB", inventory.total_memory_megabytes());
}
