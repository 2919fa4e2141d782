use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tianji_calendar::ZiHourMode;
use tianji_charts::{
    BaziInput, CalendarType, Gender, LiurenInput, LiuyaoInput, MeihuaCast, MeihuaInput,
    QimenInput, QueryMoment, ZiweiInput, calculate_bazi, calculate_liuren, calculate_liuyao,
    calculate_meihua, calculate_qimen, calculate_ziwei, extract_bazi_analysis_context,
    extract_liuren_analysis_context, extract_liuyao_analysis_context,
    extract_meihua_analysis_context, extract_qimen_analysis_context,
    extract_ziwei_analysis_context,
};

#[derive(Parser)]
#[command(name = "tianji", about = "Chinese metaphysical chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Print the flattened analysis context instead of JSON
    #[arg(long, global = true)]
    context: bool,
}

#[derive(Args)]
struct MomentArgs {
    /// Civil year (1900-2100)
    #[arg(long)]
    year: i32,
    /// Month 1-12
    #[arg(long)]
    month: u32,
    /// Day of month
    #[arg(long)]
    day: u32,
    /// Hour 0-23; omit when the birth hour is unknown
    #[arg(long)]
    hour: Option<u32>,
    /// Minute 0-59
    #[arg(long, default_value = "0")]
    minute: u32,
    /// Interpret the date as a lunar calendar date
    #[arg(long)]
    lunar: bool,
    /// The lunar date falls in the leap month
    #[arg(long)]
    leap: bool,
    /// Treat 23:00-23:59 as the current day (early zi hour)
    #[arg(long)]
    early_zi: bool,
    /// Birthplace longitude for true-solar-time correction
    #[arg(long)]
    longitude: Option<f64>,
}

impl MomentArgs {
    fn to_moment(&self) -> QueryMoment {
        QueryMoment {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            calendar: if self.lunar {
                CalendarType::Lunar
            } else {
                CalendarType::Solar
            },
            leap_month: self.leap,
            zi_hour: if self.early_zi {
                ZiHourMode::Early
            } else {
                ZiHourMode::Late
            },
            longitude: self.longitude,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// BaZi (Four Pillars) chart
    Bazi {
        #[command(flatten)]
        moment: MomentArgs,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Zi Wei Dou Shu chart
    Ziwei {
        #[command(flatten)]
        moment: MomentArgs,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
    },
    /// Qi Men Dun Jia board
    Qimen {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Liu Yao hexagram
    Liuyao {
        #[command(flatten)]
        moment: MomentArgs,
        /// Six cast values bottom-to-top (6/7/8/9); omit for random
        #[arg(long, value_delimiter = ',')]
        lines: Option<Vec<u8>>,
    },
    /// Da Liu Ren board
    Liuren {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Mei Hua Yi Shu cast from two numbers
    Meihua {
        /// Upper trigram number
        #[arg(long)]
        upper: u64,
        /// Lower trigram number
        #[arg(long)]
        lower: u64,
    },
    /// Mei Hua Yi Shu cast from a date and hour
    MeihuaTime {
        #[command(flatten)]
        moment: MomentArgs,
    },
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s {
        "male" | "m" | "男" => Ok(Gender::Male),
        "female" | "f" | "女" => Ok(Gender::Female),
        other => Err(format!("unknown gender '{other}': use male or female")),
    }
}

fn print_result<T: serde::Serialize>(
    result: &T,
    context: bool,
    lines: Vec<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    if context {
        for line in lines {
            println!("{line}");
        }
    } else {
        println!("{}", serde_json::to_string_pretty(result)?);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Bazi { moment, gender } => {
            let input = BaziInput {
                moment: moment.to_moment(),
                gender: parse_gender(gender)?,
            };
            let chart = calculate_bazi(&input)?;
            let ctx = extract_bazi_analysis_context(&chart);
            print_result(&chart, cli.context, ctx.lines())
        }
        Commands::Ziwei { moment, gender } => {
            let input = ZiweiInput {
                moment: moment.to_moment(),
                gender: parse_gender(gender)?,
            };
            let chart = calculate_ziwei(&input)?;
            let ctx = extract_ziwei_analysis_context(&chart);
            print_result(&chart, cli.context, ctx.lines())
        }
        Commands::Qimen { moment } => {
            let board = calculate_qimen(&QimenInput {
                moment: moment.to_moment(),
            })?;
            let ctx = extract_qimen_analysis_context(&board);
            print_result(&board, cli.context, ctx.lines())
        }
        Commands::Liuyao { moment, lines } => {
            let result = calculate_liuyao(&LiuyaoInput {
                moment: moment.to_moment(),
                lines: lines.clone(),
            })?;
            let ctx = extract_liuyao_analysis_context(&result);
            print_result(&result, cli.context, ctx.lines())
        }
        Commands::Liuren { moment } => {
            let board = calculate_liuren(&LiurenInput {
                moment: moment.to_moment(),
            })?;
            let ctx = extract_liuren_analysis_context(&board);
            print_result(&board, cli.context, ctx.lines())
        }
        Commands::Meihua { upper, lower } => {
            let result = calculate_meihua(&MeihuaInput {
                cast: MeihuaCast::Numbers {
                    upper: *upper,
                    lower: *lower,
                },
            })?;
            let ctx = extract_meihua_analysis_context(&result);
            print_result(&result, cli.context, ctx.lines())
        }
        Commands::MeihuaTime { moment } => {
            let result = calculate_meihua(&MeihuaInput {
                cast: MeihuaCast::Time {
                    moment: moment.to_moment(),
                },
            })?;
            let ctx = extract_meihua_analysis_context(&result);
            print_result(&result, cli.context, ctx.lines())
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
