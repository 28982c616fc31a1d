use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate coaching feedback from a prediction explanation.
#[derive(Parser)]
#[command(name = "farol", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Feedback for a predicted performance score (0-100).
    Performance {
        /// Explanation string attached to the prediction.
        explanation: String,
        /// Predicted score; missing scores band as 0.
        #[arg(long)]
        score: Option<f64>,
        /// Upstream classification label (logged, never phrased).
        #[arg(long)]
        classification: Option<String>,
    },
    /// Feedback for a predicted dropout probability (0-1).
    Dropout {
        /// Explanation string attached to the prediction.
        explanation: String,
        /// Dropout probability; missing probabilities band as low risk.
        #[arg(long)]
        probability: Option<f64>,
        /// Upstream classification label (logged, never phrased).
        #[arg(long)]
        classification: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    }

    let cli = Cli::parse();
    let feedback = dispatch(cli.command);

    println!("{}", serde_json::to_string_pretty(&feedback)?);
    Ok(())
}

fn dispatch(command: Command) -> farol_core::FeedbackMessage {
    match command {
        Command::Performance {
            explanation,
            score,
            classification,
        } => {
            tracing::debug!(domain = "performance", score, "dispatching feedback request");
            farol_core::performance_feedback(&explanation, score, classification.as_deref())
        }
        Command::Dropout {
            explanation,
            probability,
            classification,
        } => {
            tracing::debug!(domain = "dropout", probability, "dispatching feedback request");
            farol_core::dropout_feedback(&explanation, probability, classification.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_args_parse_and_dispatch() {
        let cli = Cli::try_parse_from([
            "farol",
            "performance",
            "Horas de Estudo: 15 (influência negativa)",
            "--score",
            "65",
        ])
        .expect("valid args");
        let fb = dispatch(cli.command);
        assert_eq!(fb.features.len(), 1);
        assert_eq!(fb.features[0].feature, "Horas de Estudo");
        assert!(!fb.suggestions.is_empty());
    }

    #[test]
    fn dropout_args_parse_and_dispatch() {
        let cli = Cli::try_parse_from(["farol", "dropout", "", "--probability", "0.8"])
            .expect("valid args");
        let fb = dispatch(cli.command);
        assert!(fb.features.is_empty());
        assert!(!fb.message.is_empty());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["farol", "forecast", "x"]).is_err());
    }
}
