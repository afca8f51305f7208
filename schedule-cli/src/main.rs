mod presenter;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use schedule_api::config::{self, LOGIN_ENV, PASSWORD_ENV};
use schedule_core::forms::{defaults, field};
use schedule_core::{submit_form, FormFields, FormKind, ScheduleType, SubmissionOutcome};

use presenter::TerminalPresenter;

#[derive(Parser)]
#[command(
    name = "schedule-desk",
    about = "Parse MPEI schedules, push them to YouGile and search for common free windows"
)]
struct Cli {
    /// Schedule service URL (overrides SCHEDULE_API_URL env var)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Credentials {
    /// YouGile login (overrides YOUGILE_LOGIN env var)
    #[arg(long)]
    login: Option<String>,

    /// YouGile password (overrides YOUGILE_PASSWORD env var)
    #[arg(long)]
    password: Option<String>,

    /// YouGile project holding the schedule boards
    #[arg(long, default_value = defaults::PROJECT_TITLE)]
    project_title: String,
}

#[derive(Args)]
struct SearchWindow {
    /// Comma separated participants (board names), e.g. "А-01-22, Иванов И.И."
    #[arg(long)]
    participants: String,

    /// First day to search (YYYY-MM-DD)
    #[arg(long)]
    start_date: String,

    /// Last day to search (YYYY-MM-DD)
    #[arg(long)]
    end_date: String,

    /// Start of the working day (HH:MM)
    #[arg(long, default_value = defaults::EARLIEST_START_TIME)]
    earliest_start_time: String,

    /// End of the working day (HH:MM)
    #[arg(long, default_value = defaults::LATEST_END_TIME)]
    latest_end_time: String,

    /// Minimum gap between lessons, in hours
    #[arg(long, default_value = "0")]
    min_gap_hours: String,

    #[arg(long)]
    include_holidays: bool,

    #[arg(long)]
    include_weekends: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schedule from the university timetable
    Parse {
        /// Group, room or teacher name
        name: String,

        #[arg(long, default_value = "group", value_parser = parse_schedule_type)]
        schedule_type: String,

        /// Maximum number of weeks to fetch
        #[arg(long, default_value = "21")]
        max_weeks: String,

        /// Let the service delete its intermediate files
        #[arg(long)]
        cleanup_files: bool,

        /// Let the service keep a copy of the result
        #[arg(long)]
        save_to_file: bool,

        /// Write the parsed schedule here, ready for `integrate --schedule-file`
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Push a parsed schedule into YouGile
    Integrate {
        #[command(flatten)]
        credentials: Credentials,

        /// JSON file with the schedule (as written by `parse --save`)
        #[arg(long)]
        schedule_file: PathBuf,

        /// Board name for the schedule
        #[arg(long)]
        schedule_name: String,
    },
    /// Find a window free for every participant
    CommonWindow {
        #[command(flatten)]
        credentials: Credentials,

        #[command(flatten)]
        window: SearchWindow,

        /// Required window length, in hours
        #[arg(long)]
        required_duration: String,

        #[arg(long)]
        maximize_participants: bool,

        #[arg(long)]
        minimize_start_time: bool,

        #[arg(long)]
        minimize_total_idle: bool,

        #[arg(long)]
        minimize_max_gap: bool,

        #[arg(long, default_value = "1")]
        weight_participants: String,

        #[arg(long, default_value = "1")]
        weight_start_time: String,

        #[arg(long, default_value = "1")]
        weight_total_idle: String,

        #[arg(long, default_value = "1")]
        weight_max_gap: String,
    },
    /// Find a window split into several segments
    SplitWindow {
        #[command(flatten)]
        credentials: Credentials,

        #[command(flatten)]
        window: SearchWindow,

        /// Total length of all segments, in hours
        #[arg(long)]
        total_duration: String,

        /// Shortest allowed segment, in hours
        #[arg(long, default_value = "0.5")]
        min_segment_duration: String,

        #[arg(long, default_value = "5")]
        max_segments: String,
    },
    /// Check that the service is up
    Health,
}

fn parse_schedule_type(id: &str) -> Result<String, String> {
    match ScheduleType::from_id(id) {
        Some(t) => Ok(t.id().to_string()),
        None => {
            let known: Vec<_> = ScheduleType::ALL.iter().map(|t| t.id()).collect();
            Err(format!("expected one of {}", known.join(", ")))
        }
    }
}

fn flag(fields: &mut FormFields, name: &str, on: bool) {
    if on {
        fields.push(name, "on");
    }
}

fn credential_fields(credentials: &Credentials) -> FormFields {
    let mut fields = FormFields::new();
    if let Some(login) = config::resolve_credential(&credentials.login, LOGIN_ENV) {
        fields.push(field::LOGIN, login);
    }
    if let Some(password) = config::resolve_credential(&credentials.password, PASSWORD_ENV) {
        fields.push(field::PASSWORD, password);
    }
    fields.push(field::PROJECT_TITLE, credentials.project_title.as_str());
    fields
}

fn window_fields(fields: &mut FormFields, window: &SearchWindow) {
    fields.push(field::PARTICIPANTS, window.participants.as_str());
    fields.push(field::START_DATE, window.start_date.as_str());
    fields.push(field::END_DATE, window.end_date.as_str());
    fields.push(field::EARLIEST_START_TIME, window.earliest_start_time.as_str());
    fields.push(field::LATEST_END_TIME, window.latest_end_time.as_str());
    fields.push(field::MIN_GAP_HOURS, window.min_gap_hours.as_str());
    flag(fields, field::INCLUDE_HOLIDAYS, window.include_holidays);
    flag(fields, field::INCLUDE_WEEKENDS, window.include_weekends);
}

/// A form to submit, plus the parse save path.
type Submission = (FormKind, FormFields, Option<PathBuf>);

/// The field set the browser form would submit, plus the parse save path.
/// `None` for commands that are not form submissions.
fn build_submission(command: Commands) -> Result<Option<Submission>, String> {
    let submission = match command {
        Commands::Parse {
            name,
            schedule_type,
            max_weeks,
            cleanup_files,
            save_to_file,
            save,
        } => {
            let mut fields = FormFields::new()
                .with(field::NAME, name)
                .with(field::SCHEDULE_TYPE, schedule_type)
                .with(field::MAX_WEEKS, max_weeks);
            flag(&mut fields, field::CLEANUP_FILES, cleanup_files);
            flag(&mut fields, field::SAVE_TO_FILE, save_to_file);
            (FormKind::Parse, fields, save)
        }
        Commands::Integrate {
            credentials,
            schedule_file,
            schedule_name,
        } => {
            let schedule = std::fs::read_to_string(&schedule_file)
                .map_err(|e| format!("can't read {}: {e}", schedule_file.display()))?;
            let fields = credential_fields(&credentials)
                .with(field::SCHEDULE_DATA, schedule)
                .with(field::SCHEDULE_NAME, schedule_name);
            (FormKind::Yougile, fields, None)
        }
        Commands::CommonWindow {
            credentials,
            window,
            required_duration,
            maximize_participants,
            minimize_start_time,
            minimize_total_idle,
            minimize_max_gap,
            weight_participants,
            weight_start_time,
            weight_total_idle,
            weight_max_gap,
        } => {
            let mut fields = credential_fields(&credentials);
            window_fields(&mut fields, &window);
            fields.push(field::REQUIRED_DURATION, required_duration);
            flag(&mut fields, field::MAXIMIZE_PARTICIPANTS, maximize_participants);
            flag(&mut fields, field::MINIMIZE_START_TIME, minimize_start_time);
            flag(&mut fields, field::MINIMIZE_TOTAL_IDLE, minimize_total_idle);
            flag(&mut fields, field::MINIMIZE_MAX_GAP, minimize_max_gap);
            fields.push(field::WEIGHT_PARTICIPANTS, weight_participants);
            fields.push(field::WEIGHT_START_TIME, weight_start_time);
            fields.push(field::WEIGHT_TOTAL_IDLE, weight_total_idle);
            fields.push(field::WEIGHT_MAX_GAP, weight_max_gap);
            (FormKind::CommonWindow, fields, None)
        }
        Commands::SplitWindow {
            credentials,
            window,
            total_duration,
            min_segment_duration,
            max_segments,
        } => {
            let mut fields = credential_fields(&credentials);
            window_fields(&mut fields, &window);
            fields.push(field::TOTAL_DURATION, total_duration);
            fields.push(field::MIN_SEGMENT_DURATION, min_segment_duration);
            fields.push(field::MAX_SEGMENTS, max_segments);
            (FormKind::SplitWindow, fields, None)
        }
        Commands::Health => return Ok(None),
    };
    Ok(Some(submission))
}

async fn health(client: &schedule_api::ScheduleClient) {
    match client.health().await {
        Ok(status) => {
            println!("{} ({}) v{}", status.status, status.message, status.version);
            for (name, path) in &status.endpoints {
                println!("  {name:40} {path}");
            }
            if !status.is_healthy() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let base_url = config::resolve_base_url(&cli.base_url);
    log::info!("using {base_url}");
    let client = schedule_api::client(base_url);

    let submission = match build_submission(cli.command) {
        Ok(submission) => submission,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let Some((kind, fields, save_to)) = submission else {
        health(&client).await;
        return;
    };
    let presenter = TerminalPresenter::new(save_to);
    let outcome = submit_form(&client, &presenter, kind, &fields).await;
    if outcome != SubmissionOutcome::Success {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule_core::submit::prepare;
    use serde_json::json;

    fn parse_args(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("schedule-desk").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn test_parse_command_builds_parse_form() {
        let command = parse_args(&["parse", "А-01-22", "--max-weeks", "4", "--cleanup-files"]);
        let (kind, fields, save) = build_submission(command).unwrap().unwrap();
        assert_eq!(kind, FormKind::Parse);
        assert!(save.is_none());

        let body = serde_json::to_value(prepare(kind, &fields).unwrap()).unwrap();
        assert_eq!(body["name"], json!("А-01-22"));
        assert_eq!(body["schedule_type"], json!("group"));
        assert_eq!(body["max_weeks"], json!(4));
        assert_eq!(body["cleanup_files"], json!(true));
        assert_eq!(body["save_to_file"], json!(false));
    }

    #[test]
    fn test_unknown_schedule_type_rejected_by_cli() {
        let parsed = Cli::try_parse_from(["schedule-desk", "parse", "W1", "--schedule-type", "weekly"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_common_window_command_builds_search_form() {
        let command = parse_args(&[
            "common-window",
            "--login",
            "user",
            "--password",
            "pw",
            "--participants",
            "a, b ,, c",
            "--start-date",
            "2025-02-03",
            "--end-date",
            "2025-02-07",
            "--required-duration",
            "1.5",
            "--minimize-max-gap",
            "--include-weekends",
        ]);
        let (kind, fields, _) = build_submission(command).unwrap().unwrap();
        assert_eq!(kind, FormKind::CommonWindow);

        let body = serde_json::to_value(prepare(kind, &fields).unwrap()).unwrap();
        let params = &body["search_parameters"];
        assert_eq!(params["participants"], json!(["a", "b", "c"]));
        assert_eq!(params["required_duration"], json!(1.5));
        assert_eq!(params["earliest_start_time"], json!("07:00"));
        assert_eq!(params["minimize_max_gap"], json!(true));
        assert_eq!(params["maximize_participants"], json!(false));
        assert_eq!(params["include_weekends"], json!(true));
        assert_eq!(params["weight_total_idle"], json!(1.0));
        assert_eq!(body["login"], json!("user"));
        assert_eq!(body["project_title"], json!(defaults::PROJECT_TITLE));
    }

    #[test]
    fn test_split_window_defaults() {
        let command = parse_args(&[
            "split-window",
            "--login",
            "user",
            "--password",
            "pw",
            "--participants",
            "a",
            "--start-date",
            "2025-02-03",
            "--end-date",
            "2025-02-07",
            "--total-duration",
            "3",
        ]);
        let (kind, fields, _) = build_submission(command).unwrap().unwrap();
        let body = serde_json::to_value(prepare(kind, &fields).unwrap()).unwrap();
        assert_eq!(body["search_parameters"]["min_segment_duration"], json!(0.5));
        assert_eq!(body["search_parameters"]["max_segments"], json!(5));
        assert_eq!(body["search_parameters"]["include_holidays"], json!(false));
    }

    #[test]
    fn test_integrate_reads_schedule_file() {
        let path = std::env::temp_dir().join(format!("schedule-desk-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"weeks": []}"#).unwrap();
        let command = parse_args(&[
            "integrate",
            "--login",
            "user",
            "--password",
            "pw",
            "--schedule-file",
            path.to_str().unwrap(),
            "--schedule-name",
            "W1",
        ]);
        let (kind, fields, _) = build_submission(command).unwrap().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(kind, FormKind::Yougile);
        assert_eq!(fields.get(field::SCHEDULE_DATA), Some(r#"{"weeks": []}"#));
        assert_eq!(fields.get(field::SCHEDULE_NAME), Some("W1"));
    }

    #[test]
    fn test_unreadable_schedule_file_is_an_error() {
        let command = parse_args(&[
            "integrate",
            "--schedule-file",
            "/nonexistent/schedule.json",
            "--schedule-name",
            "W1",
        ]);
        let err = build_submission(command).unwrap_err();
        assert!(err.contains("/nonexistent/schedule.json"), "{err}");
    }

    #[test]
    fn test_health_is_not_a_form() {
        assert_eq!(build_submission(parse_args(&["health"])).unwrap(), None);
    }
}
