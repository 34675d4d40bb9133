//! `adalat` command-line interface.
//!
//! Thin shell over the limitation and fee engines: parses arguments,
//! reads input files, and renders results as text or JSON. All domain
//! logic lives in the library crates.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use adalat_fees::currency::{format_in_words, format_rupees};
use adalat_fees::{
    calculate_court_fee, calculate_refund, suit_types_by_group, FeeInput, FeeResult, RefundInput,
    RefundScenario, SuitGroup, SUIT_GROUPS,
};
use adalat_limitation::{
    calculate_limitation, results_summary, CalculationResult, CaseInput, CaseType,
    LIMITATION_RULES,
};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Suit group selector for `suit-types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupArg {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
}

impl GroupArg {
    fn to_group(self) -> SuitGroup {
        match self {
            GroupArg::A => SuitGroup::A,
            GroupArg::B => SuitGroup::B,
            GroupArg::C => SuitGroup::C,
            GroupArg::D => SuitGroup::D,
            GroupArg::E => SuitGroup::E,
            GroupArg::F => SuitGroup::F,
            GroupArg::G => SuitGroup::G,
            GroupArg::H => SuitGroup::H,
            GroupArg::I => SuitGroup::I,
        }
    }
}

/// Refund scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum ScenarioArg {
    AdrSettlement,
    AppealBeforeHearing,
    PlaintRejected,
    RemandOrder,
    MistakenPayment,
}

impl ScenarioArg {
    fn to_scenario(self) -> RefundScenario {
        match self {
            ScenarioArg::AdrSettlement => RefundScenario::AdrSettlement,
            ScenarioArg::AppealBeforeHearing => RefundScenario::AppealBeforeHearing,
            ScenarioArg::PlaintRejected => RefundScenario::PlaintRejected,
            ScenarioArg::RemandOrder => RefundScenario::RemandOrder,
            ScenarioArg::MistakenPayment => RefundScenario::MistakenPayment,
        }
    }
}

/// Deterministic calculators for Indian legal procedure.
#[derive(Parser)]
#[command(
    name = "adalat",
    version,
    about = "Limitation-period and court-fee calculators"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate remedies and deadlines for a judgment
    Limitation {
        /// Path to the case input JSON file
        case: PathBuf,
    },

    /// List the limitation rule table
    Rules,

    /// Compute the court fee for a suit type
    Fee {
        /// Suit type identifier (see `suit-types`)
        suit_type: String,
        /// Input value as key=amount (repeatable)
        #[arg(long = "value", value_parser = parse_key_val)]
        values: Vec<(String, f64)>,
    },

    /// List suit types, optionally limited to one group
    SuitTypes {
        /// Suit group (a through i)
        #[arg(long, value_enum)]
        group: Option<GroupArg>,
    },

    /// Estimate the refundable court fee for a scenario
    Refund {
        /// Refund scenario
        scenario: ScenarioArg,
        /// Court fees already paid, in rupees
        fees_paid: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Limitation { case } => cmd_limitation(&case, cli.output, cli.quiet),
        Commands::Rules => cmd_rules(cli.output),
        Commands::Fee { suit_type, values } => cmd_fee(&suit_type, &values, cli.output, cli.quiet),
        Commands::SuitTypes { group } => cmd_suit_types(group.map(GroupArg::to_group), cli.output),
        Commands::Refund {
            scenario,
            fees_paid,
        } => cmd_refund(scenario.to_scenario(), fees_paid, cli.output, cli.quiet),
    }
}

/// Parse one `key=amount` pair for `--value`.
fn parse_key_val(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=amount, got '{}'", s))?;
    let amount: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    Ok((key.to_string(), amount))
}

// ──────────────────────────────────────────────
// limitation
// ──────────────────────────────────────────────

fn cmd_limitation(case_path: &Path, output: OutputFormat, quiet: bool) {
    let case_str = match std::fs::read_to_string(case_path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", case_path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let input: CaseInput = match serde_json::from_str(&case_str) {
        Ok(i) => i,
        Err(e) => {
            let msg = format!("error parsing case JSON in '{}': {}", case_path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    match calculate_limitation(&input) {
        Ok(result) => match output {
            OutputFormat::Json => print_json(&result),
            OutputFormat::Text => print_limitation_text(&result, quiet),
        },
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

fn print_limitation_text(result: &CalculationResult, quiet: bool) {
    if result.options.is_empty() {
        println!("No procedural remedies found for this case configuration.");
        return;
    }

    let case_label = match result.input.case_type {
        CaseType::Civil => "civil",
        CaseType::Criminal => "criminal",
        CaseType::Writ => "writ",
    };
    println!(
        "Remedies for the {} judgment of {}, {}:\n",
        case_label,
        result.input.judgment_date,
        result.input.court_level.display_name()
    );

    for (i, option) in result.options.iter().enumerate() {
        let status = if option.is_expired {
            "EXPIRED".to_string()
        } else {
            format!("{} days remaining", option.days_remaining)
        };
        println!("{}. {} -> {}", i + 1, option.action_name, option.forum);
        println!("   {}", option.description);
        println!(
            "   Period: {} ({})",
            option.limitation_period, option.law_reference
        );
        if option.excluded_days > 0 {
            if let Some(description) = &option.excluded_period_description {
                println!("   Exclusion: {}", description);
            }
        }
        println!("   Last date: {}  [{}]", option.formatted_last_date, status);
        if let Some(notes) = &option.additional_notes {
            println!("   Note: {}", notes);
        }
        println!();
    }

    let summary = results_summary(result);
    println!(
        "{} option(s): {} active, {} expired, {} urgent (within 7 days)",
        summary.total_options,
        summary.active_options,
        summary.expired_options,
        summary.urgent_options
    );

    if !quiet {
        println!("\n{}", result.disclaimer);
    }
}

// ──────────────────────────────────────────────
// rules
// ──────────────────────────────────────────────

fn cmd_rules(output: OutputFormat) {
    match output {
        OutputFormat::Json => print_json(&LIMITATION_RULES),
        OutputFormat::Text => {
            println!("{} limitation rules:\n", LIMITATION_RULES.len());
            for rule in LIMITATION_RULES {
                println!(
                    "{:<28} {:?}/{:?}: {} -> {:?}, {} days ({})",
                    rule.id,
                    rule.case_type,
                    rule.from_court,
                    rule.action.as_str(),
                    rule.to_court,
                    rule.limitation_days,
                    rule.law_reference
                );
            }
        }
    }
}

// ──────────────────────────────────────────────
// fee
// ──────────────────────────────────────────────

fn cmd_fee(suit_type: &str, values: &[(String, f64)], output: OutputFormat, quiet: bool) {
    let input = FeeInput {
        suit_type_id: suit_type.to_string(),
        values: values.iter().cloned().collect(),
    };

    match calculate_court_fee(&input) {
        Ok(result) => match output {
            OutputFormat::Json => print_json(&result),
            OutputFormat::Text => print_fee_text(&result),
        },
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

fn print_fee_text(result: &FeeResult) {
    for step in &result.breakdown {
        println!("{:<22} {}", format!("{}:", step.label), step.value);
    }
    if !result.is_exempt {
        println!("{:<22} {}", "In Words:", format_in_words(result.fee));
    }
}

// ──────────────────────────────────────────────
// suit-types
// ──────────────────────────────────────────────

fn cmd_suit_types(group: Option<SuitGroup>, output: OutputFormat) {
    let groups: Vec<SuitGroup> = match group {
        Some(g) => vec![g],
        None => SUIT_GROUPS.to_vec(),
    };

    match output {
        OutputFormat::Json => {
            let listing: Vec<_> = groups
                .iter()
                .map(|g| {
                    serde_json::json!({
                        "group": g,
                        "label": g.label(),
                        "description": g.description(),
                        "suitTypes": suit_types_by_group(*g),
                    })
                })
                .collect();
            print_json(&listing);
        }
        OutputFormat::Text => {
            for g in groups {
                println!("Group {:?}: {}", g, g.label());
                for suit in suit_types_by_group(g) {
                    println!("  {:<38} {} ({})", suit.id, suit.label, suit.section);
                    println!("  {:<38} basis: {}", "", suit.value_basis);
                }
                println!();
            }
        }
    }
}

// ──────────────────────────────────────────────
// refund
// ──────────────────────────────────────────────

fn cmd_refund(scenario: RefundScenario, fees_paid: f64, output: OutputFormat, quiet: bool) {
    let input = RefundInput {
        scenario,
        fees_paid,
    };
    match calculate_refund(&input) {
        Ok(result) => match output {
            OutputFormat::Json => print_json(&result),
            OutputFormat::Text => {
                println!("Scenario:    {}", scenario.label());
                println!("Refund:      {}%", result.refund_percentage);
                println!("Amount:      {}", format_rupees(result.refund_amount));
                println!("Basis:       {}", result.legal_basis);
                println!("{}", result.description);
            }
        },
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

// ──────────────────────────────────────────────
// Shared output helpers
// ──────────────────────────────────────────────

fn print_json<T: serde::Serialize>(value: &T) {
    let pretty = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", msg);
            }
        }
    }
}
