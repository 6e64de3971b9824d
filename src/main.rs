mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, error::ErrorKind};
use ipchange_notify::{
    AlertStyle, SystemStatus,
    discord::{Delivery, StatusPolicy, WebhookSender},
    ip_change_notification, validate,
};
use reqwest::Url;

/// Notify a Discord channel that the public IP address of this server changed
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The new public IP address
    new_ip: String,

    /// Status of the Apache server (e.g. `active`)
    apache_status: String,

    /// Status of system updates (e.g. `Updates Available`)
    update_status: String,

    /// Current system time
    system_time: String,

    /// Report of the DNS record updates
    domain_status: String,

    /// The Discord WebHook URL the notification should be sent to
    #[arg(short, long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Url,

    /// Embed color as #RRGGBB; malformed values fall back to black
    #[arg(short, long, default_value_t = AlertStyle::default().color)]
    color: String,

    /// Embed title
    #[arg(short, long, default_value_t = AlertStyle::default().title)]
    title: String,

    /// Message text shown above the embed
    #[arg(long, default_value_t = AlertStyle::default().content)]
    content: String,

    /// Only count 2xx responses as delivered and exit with an error otherwise
    #[arg(long)]
    require_success: bool,

    /// Accept webhook URLs that are not hosted by Discord
    #[arg(long)]
    skip_url_check: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_usage_error(&e) => {
            println!("{}", e.render());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => e.exit(),
    };
    logging::init(args.verbose);

    if !args.skip_url_check {
        validate::webhook_url(&args.webhook_url).context("Invalid WebHook URL")?;
    }

    let policy = if args.require_success {
        StatusPolicy::RequireSuccess
    } else {
        StatusPolicy::AnyResponse
    };

    let status = SystemStatus {
        new_ip: args.new_ip,
        apache_status: args.apache_status,
        update_status: args.update_status,
        system_time: args.system_time,
        domain_status: args.domain_status,
    };
    let style = AlertStyle {
        title: args.title,
        content: args.content,
        color: args.color,
    };

    log::info!("Sending IP change notification for {}", status.new_ip);
    let notification = ip_change_notification(&status, &style);
    let delivery = WebhookSender::new(policy).send(&notification.build(), &args.webhook_url);

    if exits_with_failure(&delivery, args.require_success) {
        return Ok(ExitCode::FAILURE);
    }
    if !delivery.is_success() {
        log::warn!("Notification was not delivered; exiting normally");
    }
    Ok(ExitCode::SUCCESS)
}

/// Missing or surplus positional arguments.
fn is_usage_error(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
    )
}

/// Delivery is best effort unless the caller opted into strict checking.
const fn exits_with_failure(delivery: &Delivery, require_success: bool) -> bool {
    require_success && !delivery.is_success()
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    const URL: &str = "https://discord.com/api/webhooks/1/token";

    fn deliveries() -> [Delivery; 3] {
        [
            Delivery::Sent {
                status: StatusCode::NO_CONTENT,
            },
            Delivery::Rejected {
                status: StatusCode::BAD_REQUEST,
            },
            Delivery::Failed {
                reason: String::from("connection refused"),
            },
        ]
    }

    #[test]
    fn lenient_run_always_succeeds() {
        for delivery in deliveries() {
            assert!(!exits_with_failure(&delivery, false), "{delivery:?}");
        }
    }

    #[test]
    fn strict_run_fails_unless_sent() {
        let [sent, rejected, failed] = deliveries();
        assert!(!exits_with_failure(&sent, true));
        assert!(exits_with_failure(&rejected, true));
        assert!(exits_with_failure(&failed, true));
    }

    #[test]
    fn missing_positional_is_usage_error() {
        let err = Args::try_parse_from(["ipchange-notify", "1.2.3.4", "-w", URL])
            .err()
            .unwrap();
        assert!(is_usage_error(&err), "{err}");
    }

    #[test]
    fn surplus_positional_is_usage_error() {
        let argv = ["ipchange-notify", "a", "b", "c", "d", "e", "f", "-w", URL];
        let err = Args::try_parse_from(argv).err().unwrap();
        assert!(is_usage_error(&err), "{err}");
    }

    #[test]
    fn help_is_not_usage_error() {
        let err = Args::try_parse_from(["ipchange-notify", "--help"]).err().unwrap();
        assert!(!is_usage_error(&err));
    }

    #[test]
    fn five_positionals_parse() {
        let args = Args::try_parse_from([
            "ipchange-notify",
            "1.2.3.4",
            "active",
            "ok",
            "2024-01-01T00:00:00Z",
            "example.com: updated",
            "-w",
            URL,
            "--require-success",
        ])
        .unwrap();
        assert_eq!(args.domain_status, "example.com: updated");
        assert_eq!(args.color, "#a80000");
        assert!(args.require_success);
    }
}
