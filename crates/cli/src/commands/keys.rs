// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use pkgq_core::{ExpressionOperator, Registration, REGISTRY};

use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", format_keys());
    Ok(())
}

pub(crate) fn format_keys() -> String {
    let mut out = format!(
        "{:<14} {:<24} {:<16} {}\n",
        "KEY", "IDENTIFIER", "OPERATORS", "EXAMPLE"
    );
    for registration in &REGISTRY {
        out.push_str(&format!(
            "{:<14} {:<24} {:<16} {}\n",
            registration.key.as_str(),
            registration.key.identifier(),
            operators(registration),
            registration.key.example(),
        ));
    }
    out
}

fn operators(registration: &Registration) -> String {
    if registration.operators.len() == ExpressionOperator::ALL.len() {
        return "all".to_string();
    }
    registration
        .operators
        .iter()
        .map(ExpressionOperator::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
