//! Registration Example
//!
//! A headless walk through one session with the registration form:
//! - Submit an incomplete form and print the inline errors
//! - Fix a field and watch its error clear immediately
//! - Submit a valid form and follow the simulated send
//!
//! Logs go to `registration.log`.

use std::fs::File;

use formdom::Document;
use log::LevelFilter;
use regform::prelude::*;
use simplelog::{Config, WriteLogger};

fn print_form(validator: &FormValidator<DomForm>) {
    validator.with_surface(|form| {
        for field in FieldId::ALL {
            let marker = if form.is_field_invalid(field) { "✗" } else { " " };
            let feedback = form.feedback_text(field).unwrap_or_default();
            println!("  {marker} {:<17} {:<14} {feedback}", field.label(), form.value(field));
        }
        println!("  [{}] {}", form.submit_label(), form.message());
    });
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Ok(log_file) = File::create("registration.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let form = match DomForm::bind(Document::new(registration_markup())) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    let validator = FormValidator::new(form, FormConfig::default());
    validator.on_transition(|from, to| println!("  ({from:?} -> {to:?})"));

    println!("Submitting with a bad phone and a guessable password:");
    validator.edit(FieldId::FullName, "Jane Doe");
    validator.edit(FieldId::Email, "jane@doe.com");
    validator.edit(FieldId::Phone, "1234567890");
    validator.edit(FieldId::Password, "janedoe99");
    match validator.submit().await {
        Ok(SubmitOutcome::Rejected(errors)) => println!("  {} field(s) rejected", errors.len()),
        Ok(other) => println!("  unexpected outcome: {other:?}"),
        Err(e) => eprintln!("Error: {}", e),
    }
    print_form(&validator);

    println!();
    println!("Fixing the phone number:");
    validator.edit(FieldId::Phone, "5551234567");
    print_form(&validator);

    println!();
    println!("Fixing the password and submitting again:");
    validator.edit(FieldId::Password, "Secur3Tok#");
    validator.edit(FieldId::ConfirmPassword, "Secur3Tok#");
    let handle = validator.spawn_submit();
    tokio::task::yield_now().await;
    print_form(&validator);

    match handle.await {
        Ok(Ok(outcome)) => println!("  outcome: {outcome:?}"),
        Ok(Err(e)) => eprintln!("Error: {}", e),
        Err(e) => eprintln!("Error: {}", e),
    }
    print_form(&validator);
}
