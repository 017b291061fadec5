//! `sched` CLI — operator/diagnostic harness over the salon scheduling core.
//!
//! Snapshots (tenant zone, services, staff with shifts, bookings) are plain
//! JSON files; the engine itself never touches storage.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize intake records (stdin → stdout) against a salon snapshot
//! cat intake.json | sched resolve --snapshot salon.json --today 2026-10-20
//!
//! # Validate a candidate interval for a staff member
//! sched check --snapshot salon.json --staff st-1 \
//!     --start 2026-10-24T10:30:00+03:30 --end 2026-10-24T11:00:00+03:30
//!
//! # Apply a drag-and-drop reschedule and emit the updated snapshot
//! sched reschedule --snapshot salon.json --booking bk-1 \
//!     --start 2026-10-24T12:00:00+03:30 --end 2026-10-24T12:30:00+03:30
//! ```
//!
//! Exit codes: 0 success, 1 business rejection (conflict/outside shift),
//! 2 malformed input or I/O failure.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::process;

use sched_engine::{
    admit_booking, check_interval, reschedule, Booking, BookingId, BookingRecord, Interval,
    RescheduleOutcome, ScheduleError, Service, ServiceCatalog, ShiftRegistry, StaffId,
    StaffMember, TenantId,
};

#[derive(Parser)]
#[command(name = "sched", version, about = "Salon booking/shift scheduling harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the tenant time zone from the snapshot (IANA name)
    #[arg(long, global = true)]
    timezone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize raw intake records into canonical bookings
    Resolve {
        /// Snapshot file with the tenant zone, services, staff, and bookings
        #[arg(short, long)]
        snapshot: String,
        /// Intake records file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Anchor date for legacy labels, YYYY-MM-DD (defaults to the
        /// current date in the tenant zone)
        #[arg(long)]
        today: Option<String>,
    },
    /// Validate a candidate interval for a staff member
    Check {
        #[arg(short, long)]
        snapshot: String,
        /// Staff member id
        #[arg(long)]
        staff: String,
        /// Candidate start, RFC 3339
        #[arg(long)]
        start: String,
        /// Candidate end, RFC 3339
        #[arg(long)]
        end: String,
        /// Booking id to exclude from the overlap set
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Apply a drag-and-drop reschedule and emit the updated snapshot
    Reschedule {
        #[arg(short, long)]
        snapshot: String,
        /// Booking id being moved
        #[arg(long)]
        booking: String,
        /// New start, RFC 3339
        #[arg(long)]
        start: String,
        /// New end, RFC 3339
        #[arg(long)]
        end: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// On-disk snapshot of one tenant's scheduling state.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    tenant_id: TenantId,
    #[serde(default)]
    timezone: Option<String>,
    #[serde(default)]
    services: Vec<Service>,
    #[serde(default)]
    staff: Vec<StaffEntry>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StaffEntry {
    #[serde(flatten)]
    member: StaffMember,
    #[serde(default)]
    shifts: Vec<ShiftSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShiftSpec {
    weekday: u8,
    start: String,
    end: String,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let timezone_flag = cli.timezone.as_deref();

    match cli.command {
        Commands::Resolve {
            snapshot,
            input,
            output,
            today,
        } => {
            let snap = load_snapshot(&snapshot)?;
            let tz = tenant_zone(&snap, timezone_flag)?;
            let catalog = ServiceCatalog::new(snap.services.clone());
            let registry = build_registry(&snap)?;
            let today = anchor_date(today.as_deref(), tz)?;

            let raw = read_input(input.as_deref())?;
            let records: Vec<BookingRecord> =
                serde_json::from_str(&raw).context("Failed to parse intake records")?;

            let mut existing = snap.bookings.clone();
            let mut admitted = Vec::new();
            for record in &records {
                match admit_booking(
                    &snap.tenant_id,
                    record,
                    &catalog,
                    &registry,
                    &existing,
                    today,
                    tz,
                ) {
                    Ok(booking) => {
                        existing.push(booking.clone());
                        admitted.push(booking);
                    }
                    Err(ScheduleError::Conflict(reason)) => {
                        eprintln!("rejected: record {}: {reason}", record.id());
                        return Ok(1);
                    }
                    Err(err) => {
                        return Err(err)
                            .with_context(|| format!("record {} was not admitted", record.id()));
                    }
                }
            }

            let json = serde_json::to_string_pretty(&admitted)?;
            write_output(output.as_deref(), &json)?;
            Ok(0)
        }
        Commands::Check {
            snapshot,
            staff,
            start,
            end,
            exclude,
        } => {
            let snap = load_snapshot(&snapshot)?;
            let tz = tenant_zone(&snap, timezone_flag)?;
            let registry = build_registry(&snap)?;
            let candidate = Interval {
                start: parse_timestamp(&start)?,
                end: parse_timestamp(&end)?,
            };
            let exclude = exclude.map(BookingId);

            match check_interval(
                &StaffId(staff),
                candidate,
                &snap.bookings,
                &registry,
                tz,
                exclude.as_ref(),
            ) {
                Ok(()) => {
                    println!("ok: interval is bookable");
                    Ok(0)
                }
                Err(reason) => {
                    eprintln!("rejected: {reason}");
                    Ok(1)
                }
            }
        }
        Commands::Reschedule {
            snapshot,
            booking,
            start,
            end,
            output,
        } => {
            let mut snap = load_snapshot(&snapshot)?;
            let tz = tenant_zone(&snap, timezone_flag)?;
            let registry = build_registry(&snap)?;
            let booking_id = BookingId(booking);
            let new_start = parse_timestamp(&start)?;
            let new_end = parse_timestamp(&end)?;

            match reschedule(
                &booking_id,
                new_start,
                new_end,
                &snap.bookings,
                &registry,
                tz,
            ) {
                Err(err) => {
                    eprintln!("error: {err}");
                    Ok(2)
                }
                Ok(RescheduleOutcome::Rejected { reason, .. }) => {
                    eprintln!("rejected: {reason}");
                    Ok(1)
                }
                Ok(RescheduleOutcome::Applied(updated)) => {
                    for existing in &mut snap.bookings {
                        if existing.id == updated.id {
                            *existing = updated.clone();
                        }
                    }
                    let json = serde_json::to_string_pretty(&snap)?;
                    write_output(output.as_deref(), &json)?;
                    Ok(0)
                }
            }
        }
    }
}

fn load_snapshot(path: &str) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse snapshot: {path}"))
}

/// The tenant's fixed zone: the --timezone flag wins, then the snapshot,
/// then the platform default.
fn tenant_zone(snapshot: &Snapshot, flag: Option<&str>) -> Result<Tz> {
    let name = flag
        .or(snapshot.timezone.as_deref())
        .unwrap_or("Asia/Tehran");
    name.parse::<Tz>()
        .map_err(|_| anyhow!("invalid IANA timezone: {name}"))
}

fn anchor_date(flag: Option<&str>, tz: Tz) -> Result<NaiveDate> {
    match flag {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("not a YYYY-MM-DD date: {raw}")),
        None => Ok(Utc::now().with_timezone(&tz).date_naive()),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("not an RFC 3339 timestamp: {raw}"))
}

/// Register every stored shift, then shut down all seven days for inactive
/// staff so they cannot receive new bookings.
fn build_registry(snapshot: &Snapshot) -> Result<ShiftRegistry> {
    let mut registry = ShiftRegistry::new();
    for entry in &snapshot.staff {
        for spec in &entry.shifts {
            registry
                .set_shift(
                    &entry.member.id,
                    spec.weekday,
                    &spec.start,
                    &spec.end,
                    spec.active,
                )
                .with_context(|| format!("invalid shift for staff {}", entry.member.id))?;
        }
        if !entry.member.active {
            for weekday in 0..7 {
                registry.deactivate(&entry.member.id, weekday)?;
            }
        }
    }
    Ok(registry)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
