#[macro_use]
extern crate log;

use std::path::PathBuf;

use chrono::{Local, NaiveDate, TimeDelta};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use opensleep::{
    DayWindow, SleepReport,
    algo::{SleepSegmenter, SourceFilter},
    listing::{render_periods, render_samples},
    load_samples,
    types::Sample,
};

#[derive(Parser)]
pub struct OpenSleepCli {
    /// JSON file with the exported sleep samples
    #[arg(env = "SLEEP_INPUT", long)]
    pub input: PathBuf,
    #[clap(subcommand)]
    pub subcommand: OpenSleepCommand,
}

#[derive(Args)]
pub struct DayArgs {
    /// Only use samples starting on this local calendar day
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct SegmentArgs {
    #[arg(long, default_value_t = 30)]
    pub gap_tolerance_minutes: i64,
    #[arg(long, default_value_t = 30)]
    pub min_sleep_minutes: i64,
}

impl SegmentArgs {
    fn segmenter(&self) -> SleepSegmenter {
        SleepSegmenter::new(
            TimeDelta::minutes(self.gap_tolerance_minutes),
            TimeDelta::minutes(self.min_sleep_minutes),
        )
    }
}

#[derive(Subcommand)]
pub enum OpenSleepCommand {
    ///
    /// Print sleep and wake time, time per stage, efficiency and awakenings
    ///
    Report {
        #[command(flatten)]
        day: DayArgs,
        #[command(flatten)]
        segment: SegmentArgs,
        /// Stage totals only count samples whose source starts with this
        #[arg(long, env = "SLEEP_SOURCE_PREFIX", default_value = "com.apple.health")]
        source_prefix: String,
        /// Count samples from every source
        #[arg(long)]
        all_sources: bool,
        #[arg(long)]
        json: bool,
    },
    ///
    /// List raw samples
    ///
    Samples {
        #[command(flatten)]
        day: DayArgs,
    },
    ///
    /// List merged sleep periods
    ///
    Periods {
        #[command(flatten)]
        day: DayArgs,
        #[command(flatten)]
        segment: SegmentArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = OpenSleepCli::parse();
    let samples = load_samples(&cli.input)?;

    match cli.subcommand {
        OpenSleepCommand::Report {
            day,
            segment,
            source_prefix,
            all_sources,
            json,
        } => {
            let samples = select_day(samples, &day)?;
            let source_filter = if all_sources {
                SourceFilter::Any
            } else {
                SourceFilter::prefix(source_prefix)
            };

            let report = SleepReport::build(&samples, &segment.segmenter(), &source_filter)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report.render(&Local));
            }
            Ok(())
        }
        OpenSleepCommand::Samples { day } => {
            let samples = select_day(samples, &day)?;
            print!("{}", render_samples(&samples, &Local));
            Ok(())
        }
        OpenSleepCommand::Periods { day, segment } => {
            let samples = select_day(samples, &day)?;
            let periods = segment.segmenter().analyze_sleep_periods(&samples)?;
            if periods.is_empty() {
                println!("No sleep periods detected");
            }
            print!("{}", render_periods(&periods, &Local));
            Ok(())
        }
    }
}

fn select_day(samples: Vec<Sample>, day: &DayArgs) -> anyhow::Result<Vec<Sample>> {
    let Some(date) = day.date else {
        return Ok(samples);
    };

    let window = DayWindow::local(date)?;
    let selected = window.filter(&samples);
    if selected.is_empty() {
        warn!("No samples start on {}", date);
    } else {
        info!("{} of {} samples start on {}", selected.len(), samples.len(), date);
    }
    Ok(selected)
}
