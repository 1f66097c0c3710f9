//! One-line transaction entry: `[+|-]amount description [#category]`.
//!
//! `+` records income, `-` or no sign an expense. Without a tag, income lands
//! in `income` and expenses in `other`. The result still goes through the
//! engine validation on submit.

use chrono::NaiveDate;
use engine::{Category, DATE_FORMAT, TransactionInput, TransactionKind};

pub fn parse(input: &str, today: NaiveDate) -> Result<TransactionInput, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter an amount.".to_string());
    }

    let (kind, rest) = if let Some(stripped) = trimmed.strip_prefix('+') {
        (TransactionKind::Income, stripped.trim_start())
    } else if let Some(stripped) = trimmed.strip_prefix('-') {
        (TransactionKind::Expense, stripped.trim_start())
    } else {
        (TransactionKind::Expense, trimmed)
    };

    let mut parts = rest.splitn(2, ' ');
    let amount_raw = parts.next().unwrap_or("").trim();
    if amount_raw.is_empty() {
        return Err("Missing amount.".to_string());
    }
    let description_raw = parts.next().unwrap_or("").trim();

    let (tag, description) = parse_tag(description_raw)?;
    let category = match tag {
        Some(tag) => Category::try_from(tag.as_str()).map_err(|err| err.to_string())?,
        None => match kind {
            TransactionKind::Income => Category::Income,
            TransactionKind::Expense => Category::Other,
        },
    };

    Ok(TransactionInput {
        description,
        amount: amount_raw.to_string(),
        category: Some(category),
        date: today.format(DATE_FORMAT).to_string(),
        kind,
    })
}

fn parse_tag(raw: &str) -> Result<(Option<String>, String), String> {
    let mut tag: Option<String> = None;
    let mut kept: Vec<&str> = Vec::new();

    for token in raw.split_whitespace() {
        if let Some(rest) = token.strip_prefix('#') {
            if rest.is_empty() {
                kept.push(token);
                continue;
            }
            if tag.is_some() {
                return Err("Only one #category allowed.".to_string());
            }
            tag = Some(rest.to_lowercase());
        } else {
            kept.push(token);
        }
    }

    Ok((tag, kept.join(" ")))
}
