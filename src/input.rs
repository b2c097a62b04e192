// Input resolver: target address (re-prompted until valid), then duration and interval
// with a single all-or-nothing fallback to the configured defaults.

use std::io::{BufRead, Write};

use crate::config::{BenchConfig, RunConfig};
use crate::error::InputError;

const ADDRESS_PROMPT: &str = "Enter the IP address of the Bitaxe (e.g., 192.168.2.117): ";
const DURATION_PROMPT: &str = "Enter the duration for data collection (in minutes): ";
const INTERVAL_PROMPT: &str = "Enter the interval between data samples (in seconds): ";

/// Longest run the clock arithmetic accepts (about 136 years).
pub const MAX_DURATION_SECS: i64 = u32::MAX as i64;

/// Values already supplied on the command line; `None` means ask the operator.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub address: Option<String>,
    pub duration_minutes: Option<String>,
    pub interval_secs: Option<String>,
}

/// Strict dotted-quad check: exactly four decimal octets of 1-3 digits, each in 0..=255.
/// Leading zeros are allowed ("010" is octet 10).
pub fn validate_ip_address(address: &str) -> bool {
    let mut octets = 0;
    for part in address.split('.') {
        octets += 1;
        if octets > 4
            || part.is_empty()
            || part.len() > 3
            || !part.bytes().all(|b| b.is_ascii_digit())
        {
            return false;
        }
        match part.parse::<u16>() {
            Ok(v) if v <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

/// Asks for the address until a valid one is entered.
pub fn prompt_address<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String, InputError> {
    loop {
        let line = prompt_line(input, out, ADDRESS_PROMPT)?
            .ok_or(InputError::EndOfInput("IP address"))?;
        if validate_ip_address(&line) {
            return Ok(line);
        }
        writeln!(out, "Invalid IP address format. Please enter a valid IP address.")?;
    }
}

/// Parses duration (minutes) and interval (seconds). Returns `(duration_secs, interval_secs)`.
pub fn parse_timing(duration_minutes: &str, interval_secs: &str) -> Result<(u64, u64), InputError> {
    let duration_secs = parse_duration_secs(duration_minutes)?;
    let interval = parse_integer("interval", interval_secs)?;
    positive_timing(duration_secs, interval)
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, InputError> {
    value.trim().parse::<i64>().map_err(|_| InputError::NotANumber {
        field,
        value: value.trim().to_string(),
    })
}

fn parse_duration_secs(duration_minutes: &str) -> Result<i64, InputError> {
    // Overflow is as unusable as a non-number.
    let secs = parse_integer("duration", duration_minutes)?
        .checked_mul(60)
        .ok_or_else(|| InputError::NotANumber {
            field: "duration",
            value: duration_minutes.trim().to_string(),
        })?;
    if secs > MAX_DURATION_SECS {
        return Err(InputError::DurationTooLong(secs / 60));
    }
    Ok(secs)
}

fn positive_timing(duration_secs: i64, interval_secs: i64) -> Result<(u64, u64), InputError> {
    if duration_secs <= 0 || interval_secs <= 0 {
        return Err(InputError::NotPositive);
    }
    Ok((duration_secs as u64, interval_secs as u64))
}

/// Resolves the full RunConfig from overrides and prompts.
///
/// The address is re-prompted until valid. A bad duration or interval discards
/// everything the operator entered, address included, and the configured default
/// run is used instead. A non-numeric duration skips the interval prompt.
pub fn resolve_run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    overrides: &InputOverrides,
    config: &BenchConfig,
) -> Result<RunConfig, InputError> {
    let address = match &overrides.address {
        Some(address) if validate_ip_address(address.trim()) => address.trim().to_string(),
        Some(address) => return Err(InputError::InvalidAddress(address.clone())),
        None => prompt_address(input, out)?,
    };

    match resolve_timing(input, out, overrides) {
        Ok((duration_secs, interval_secs)) => Ok(RunConfig {
            address,
            duration_secs,
            interval_secs,
        }),
        Err(InputError::Io(e)) => Err(InputError::Io(e)),
        Err(e) => {
            let fallback = config.default_run();
            writeln!(
                out,
                "Invalid input: {}. Using default values ({} minute{}, {} seconds).",
                e,
                fallback.duration_secs / 60,
                if fallback.duration_secs / 60 == 1 { "" } else { "s" },
                fallback.interval_secs
            )?;
            tracing::warn!(
                error = %e,
                operation = "resolve_timing",
                address = %fallback.address,
                duration_secs = fallback.duration_secs,
                interval_secs = fallback.interval_secs,
                "falling back to default run"
            );
            Ok(fallback)
        }
    }
}

fn resolve_timing<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    overrides: &InputOverrides,
) -> Result<(u64, u64), InputError> {
    let duration = match &overrides.duration_minutes {
        Some(v) => v.clone(),
        None => prompt_line(input, out, DURATION_PROMPT)?.unwrap_or_default(),
    };
    let duration_secs = parse_duration_secs(&duration)?;
    let interval = match &overrides.interval_secs {
        Some(v) => v.clone(),
        None => prompt_line(input, out, INTERVAL_PROMPT)?.unwrap_or_default(),
    };
    let interval_secs = parse_integer("interval", &interval)?;
    positive_timing(duration_secs, interval_secs)
}

/// Prints the prompt and reads one trimmed line; `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, InputError> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
