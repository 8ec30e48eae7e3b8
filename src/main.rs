//! Month calendar CLI application.
//!
//! # Usage
//! ```ignore
//! kalender            // Current month
//! kalender 6 2024     // June 2024
//! kalender -3         // Three months
//! kalender -n         // Next month
//! kalender -H         // This year's holidays
//! ```

use kalender::activity::{activities_for_month, group_by_date, load_activities};
use kalender::args::{Args, get_display_month, resolve_selection};
use kalender::calendar::build_month_grid;
use kalender::error::Result;
use kalender::formatter::{
    ActivitiesByDate, print_day_details, print_holiday_list, print_month, print_three_months,
};
use kalender::types::CalContext;
use tracing::info;

fn main() {
    let args = Args::parse();
    kalender::logging::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("kalender: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let ctx = CalContext::new(args)?;
    let month = get_display_month(args)?;
    info!(year = month.year, month = month.month, "displaying month");

    if args.holidays {
        print_holiday_list(month.year);
        return Ok(());
    }

    let activities: ActivitiesByDate = match &args.activities {
        Some(path) => {
            let all = load_activities(path)?;
            let shown = if args.three_months {
                [month.prev(), month, month.next()]
                    .iter()
                    .flat_map(|&m| activities_for_month(&all, m))
                    .collect::<Vec<_>>()
            } else {
                activities_for_month(&all, month)
            };
            group_by_date(shown)
        }
        None => ActivitiesByDate::new(),
    };

    if args.three_months {
        print_three_months(&ctx, month, &activities);
    } else {
        print_month(&ctx, month, &activities);
    }

    let cells = build_month_grid(month.year, month.month);
    let selected = resolve_selection(args, &cells, ctx.today)?;
    println!();
    print_day_details(&ctx, selected, &activities);

    Ok(())
}
