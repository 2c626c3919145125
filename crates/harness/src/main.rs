// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Distharness Developers

//! Harness binary entry point.

use clap::Parser;

use distharness::cli::Cli;
use distharness::output_diagnostic::{print_error, print_scenario_line, print_warning};
use distharness::registry;
use distharness::report::RunReport;
use distharness::runner::run_golden;
use distharness::semantic::run_cross_check;

/// Exit codes surfaced by the harness
mod exit_codes {
    /// Every scenario passed
    pub const SUCCESS: i32 = 0;
    /// At least one scenario failed
    pub const FAILURE: i32 = 1;
}

fn main() {
    let cli = Cli::parse();
    let config = cli.run_config();

    if !config.root.is_dir() {
        print_warning(format_args!(
            "root directory {} does not exist; every scenario will fail to launch",
            config.root.display()
        ));
    }

    let mut report = RunReport::new();

    for scenario in registry::golden_scenarios(&config.root) {
        let result = run_golden(&scenario, &config);
        if config.verbosity >= 1 {
            print_scenario_line(scenario.name, result.is_ok());
        }
        report.record(scenario.name, result);
    }

    for check in registry::cross_checks(&config.root) {
        let result = run_cross_check(&check, &config);
        if config.verbosity >= 1 {
            print_scenario_line(check.name, result.is_ok());
        }
        report.record(check.name, result);
    }

    for outcome in report.failures() {
        if let Err(error) = &outcome.result {
            print_error(format_args!("{}: {}", outcome.name, error));
        }
    }
    println!("{}", report.summary());

    let code = if report.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    };
    std::process::exit(code);
}
