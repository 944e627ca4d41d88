//! Command-line interface.
//!
//! Each session command loads only the collections it needs, then renders a
//! plain-text report from the [`AppState`] snapshot.

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Write as _;

use crate::api::{StrategyApi, StrategyClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::model::StakeholderQuadrant;
use crate::scoring::{parse_target_date, score};
use crate::state::AppState;

const RULE: &str = "═══════════════════════════════════════════════════════════════════════════════";

/// Strategy pyramid engine.
#[derive(Parser, Debug)]
#[command(name = "strategy-pyramid", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Score an opportunity offline
    Score {
        /// Strength match (1-5)
        #[arg(long)]
        strength: u8,

        /// Consideration risk (1-5)
        #[arg(long)]
        risk: u8,

        /// Constraint impact (1-5)
        #[arg(long)]
        constraint: u8,
    },

    /// Rank a session's opportunities by viability
    Opportunities {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },

    /// Show commitment traceability and summary
    Trace {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },

    /// List commitments
    Commitments {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,

        /// Ordering
        #[arg(long, value_enum, default_value = "horizon")]
        group: CommitmentGrouping,
    },

    /// List team objectives in commitment order
    Objectives {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },

    /// Show the stakeholder grid
    Stakeholders {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },

    /// List strategic tensions
    Tensions {
        /// Session ID (defaults to STRATEGY_SESSION_ID)
        #[arg(long)]
        session: Option<String>,
    },
}

/// How to order the commitments listing.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentGrouping {
    /// Horizon, then target date
    Horizon,
    /// Under each strategic driver
    Driver,
}

/// Result of CLI command execution.
pub struct CliResult {
    /// Exit code (0 = success)
    pub exit_code: i32,
    /// Output message
    pub message: String,
}

impl CliResult {
    /// Create a success result with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            message: message.into(),
        }
    }

    /// Create an error result with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            exit_code: 1,
            message: message.into(),
        }
    }
}

impl From<AppResult<String>> for CliResult {
    fn from(result: AppResult<String>) -> Self {
        match result {
            Ok(output) => CliResult::success(output),
            Err(e) => CliResult::error(format!("Error: {}", e)),
        }
    }
}

/// A report that needs a session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionView {
    Opportunities,
    Trace,
    Commitments(CommitmentGrouping),
    Objectives,
    Stakeholders,
    Tensions,
}

/// Execute a CLI command.
pub async fn execute_command(command: Commands, config: &Config) -> CliResult {
    let (session, view) = match command {
        Commands::Score {
            strength,
            risk,
            constraint,
        } => return execute_score(strength, risk, constraint),
        Commands::Opportunities { session } => (session, SessionView::Opportunities),
        Commands::Trace { session } => (session, SessionView::Trace),
        Commands::Commitments { session, group } => (session, SessionView::Commitments(group)),
        Commands::Objectives { session } => (session, SessionView::Objectives),
        Commands::Stakeholders { session } => (session, SessionView::Stakeholders),
        Commands::Tensions { session } => (session, SessionView::Tensions),
    };
    let Some(session_id) = session.or_else(|| config.api.default_session.clone()) else {
        return CliResult::error("No session given: pass --session or set STRATEGY_SESSION_ID");
    };

    let client = match StrategyClient::new(&config.api, config.request.clone()) {
        Ok(c) => c,
        Err(e) => return CliResult::error(format!("Error: {}", e)),
    };
    let mut state = AppState::new(client, session_id);

    render_view(view, &mut state).await.into()
}

/// Refresh the collections a view reads, then render it.
async fn render_view<A: StrategyApi>(
    view: SessionView,
    state: &mut AppState<A>,
) -> AppResult<String> {
    match view {
        SessionView::Opportunities => {
            state.refresh_socc_items().await?;
            state.refresh_opportunity_scores().await?;
            Ok(render_opportunities(state))
        }
        SessionView::Trace => {
            state.refresh_pyramid().await?;
            Ok(render_traceability(state))
        }
        SessionView::Commitments(group) => {
            state.refresh_pyramid().await?;
            Ok(match group {
                CommitmentGrouping::Horizon => render_commitments_by_horizon(state),
                CommitmentGrouping::Driver => render_commitments_by_driver(state),
            })
        }
        SessionView::Objectives => {
            state.refresh_pyramid().await?;
            Ok(render_team_objectives(state))
        }
        SessionView::Stakeholders => {
            state.refresh_stakeholders().await?;
            Ok(render_stakeholders(state))
        }
        SessionView::Tensions => {
            state.refresh_tensions().await?;
            Ok(render_tensions(state))
        }
    }
}

fn execute_score(strength: u8, risk: u8, constraint: u8) -> CliResult {
    match score(strength, risk, constraint) {
        Ok(s) => CliResult::success(format!(
            "Viability score: {} ({}, {})",
            s.value,
            s.level,
            s.level.color()
        )),
        Err(e) => CliResult::error(format!("Error: {}", e)),
    }
}

fn header(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}\n", RULE);
}

/// Scored opportunities by descending viability, then the unscored group.
pub fn render_opportunities<A: StrategyApi>(state: &AppState<A>) -> String {
    let ranking = state.opportunity_ranking();
    let mut out = String::new();
    header(&mut out, "Opportunities by Viability");

    if ranking.scored.is_empty() && ranking.unscored.is_empty() {
        out.push_str("No opportunities recorded.\n");
        return out;
    }

    for ranked in &ranking.scored {
        let _ = writeln!(
            out,
            "{:>3}  {:<9} [{}]  {}",
            ranked.viability.value,
            ranked.viability.level.to_string(),
            ranked.viability.level.color(),
            ranked.item.title
        );
    }

    if !ranking.unscored.is_empty() {
        let _ = writeln!(out, "\nNot yet scored:");
        for item in &ranking.unscored {
            let _ = writeln!(out, "  -  {}", item.title);
        }
    }
    out
}

/// Per-commitment trace rating and issues, with summary hints.
pub fn render_traceability<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Commitment Traceability");

    for (commitment, trace) in state.traceability() {
        let _ = writeln!(
            out,
            "{:<7} [{}]  {}",
            trace.score.to_string(),
            trace.score.color(),
            commitment.name
        );
        for issue in &trace.issues {
            let _ = writeln!(out, "          ! {}", issue);
        }
    }

    let summary = state.traceability_summary();
    let _ = writeln!(
        out,
        "\nTotal: {}  golden: {}  good: {}  weak: {}  orphan: {}",
        summary.total, summary.golden, summary.good, summary.weak, summary.orphan
    );
    if let Some(hint) = summary.congratulation() {
        let _ = writeln!(out, "{}", hint);
    }
    if let Some(hint) = summary.remediation() {
        let _ = writeln!(out, "{}", hint);
    }
    out
}

/// Commitments in horizon-then-date order.
pub fn render_commitments_by_horizon<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Commitments by Horizon");
    let pyramid = state.pyramid();
    for commitment in state.commitments_by_horizon() {
        let horizon = commitment
            .horizon
            .map_or_else(|| "-".to_string(), |h| h.to_string());
        let date = parse_target_date(commitment.target_date.as_deref())
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let driver = commitment
            .primary_driver_id
            .as_deref()
            .and_then(|id| pyramid.driver(id))
            .map_or("no driver", |d| d.name.as_str());
        let _ = writeln!(
            out,
            "{:<3} {:<10}  {}  ({})",
            horizon, date, commitment.name, driver
        );
    }
    out
}

/// Commitments listed under their drivers.
pub fn render_commitments_by_driver<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Commitments by Driver");
    for group in state.commitments_by_driver() {
        let name = group.driver.map_or("Unassigned", |d| d.name.as_str());
        let _ = writeln!(out, "{} ({})", name, group.commitments.len());
        for commitment in &group.commitments {
            let _ = writeln!(out, "  -  {}", commitment.name);
        }
    }
    out
}

/// Team objectives ordered by parent commitment.
pub fn render_team_objectives<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Team Objectives");
    let pyramid = state.pyramid();
    for objective in state.team_objectives_by_horizon() {
        let parent = objective
            .primary_commitment_id
            .as_deref()
            .and_then(|id| pyramid.commitment(id))
            .map_or("no commitment", |c| c.name.as_str());
        let _ = writeln!(out, "{}  ({})", objective.name, parent);
    }
    out
}

/// Stakeholders by interest/influence quadrant.
pub fn render_stakeholders<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Stakeholder Map");
    let map = state.stakeholder_map();
    for quadrant in StakeholderQuadrant::ALL {
        let cell = map.in_quadrant(quadrant);
        let _ = writeln!(out, "{} ({})", quadrant.label(), cell.len());
        for stakeholder in cell {
            let _ = writeln!(out, "  -  {} [{:?}]", stakeholder.name, stakeholder.alignment);
        }
    }
    out
}

/// Tensions with their current-to-target shift.
pub fn render_tensions<A: StrategyApi>(state: &AppState<A>) -> String {
    let mut out = String::new();
    header(&mut out, "Strategic Tensions");
    for tension in state.tensions() {
        let _ = writeln!(
            out,
            "{} <-> {}: {} -> {} ({:+})",
            tension.left_pole,
            tension.right_pole,
            tension.current_position,
            tension.target_position,
            tension.shift()
        );
    }
    out
}
