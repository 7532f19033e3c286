use chrono::{DateTime, Utc};
use colored::Colorize;
use querypro::commands::{CmdMessage, MessageLevel};
use querypro::model::Enquiry;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 20;
const EMAIL_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 18;
const MESSAGE_WIDTH: usize = 36;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_enquiries(enquiries: &[Enquiry]) {
    if enquiries.is_empty() {
        println!("No enquiries found.");
        return;
    }

    println!(
        "{}",
        format!(
            "{} {} {} {} {}",
            pad("Name", NAME_WIDTH),
            pad("Email", EMAIL_WIDTH),
            pad("Phone", PHONE_WIDTH),
            pad("Message", MESSAGE_WIDTH),
            format!("{:>width$}", "Received", width = TIME_WIDTH)
        )
        .bold()
    );
    for enquiry in enquiries {
        let message: String = enquiry
            .message
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!(
            "{} {} {} {} {}",
            pad(&enquiry.name, NAME_WIDTH),
            pad(&enquiry.email, EMAIL_WIDTH).cyan(),
            pad(&enquiry.phone, PHONE_WIDTH),
            pad(&message, MESSAGE_WIDTH),
            format_time_ago(enquiry.created_at).dimmed()
        );
    }
}

pub(super) fn print_enquiry(enquiry: &Enquiry) {
    println!("{}", enquiry.name.bold());
    println!("{} {}", "id:     ".dimmed(), enquiry.id);
    println!("{} {}", "email:  ".dimmed(), enquiry.email.cyan());
    println!("{} {}", "phone:  ".dimmed(), enquiry.phone);
    println!(
        "{} {}",
        "created:".dimmed(),
        enquiry.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    if enquiry.updated_at != enquiry.created_at {
        println!(
            "{} {}",
            "updated:".dimmed(),
            enquiry.updated_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!("--------------------------------");
    println!("{}", enquiry.message);
}

pub(super) fn print_summary(shown: usize, total: usize) {
    println!();
    println!("{}", format!("{} of {} enquiries", shown, total).dimmed());
}

/// Truncate to `width` columns and pad with spaces up to it.
fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width);
    let fill = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
