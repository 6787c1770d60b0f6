use clap::Parser;
use worktrack::application::{ConfigService, InitService, NewEntry, StoreChange, TrackerService};
use worktrack::cli::{
    format_daily_totals, format_day_header, format_entry_list, format_form_summary, format_grid,
    format_totals, Cli, Commands, Theme,
};
use worktrack::domain::calendar::{parse_weekday, shift_month, weekday_name};
use worktrack::domain::date_ref::{parse_month, parse_time, resolve_day};
use worktrack::error::Result;
use worktrack::infrastructure::FileSystemRepository;
use worktrack::logging::enable_logging;

fn main() {
    let cli = Cli::parse();
    enable_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init {
            path,
            first_weekday,
            currency,
        }) => {
            // Parse weekday string to enum
            let weekday = parse_weekday(&first_weekday)?;

            // Execute init
            InitService::execute(&path, weekday, &currency)?;
            println!("Initialized worktrack at {}", path.display());
            println!("Weeks start on {}", weekday_name(weekday));
            Ok(())
        }
        Some(Commands::Add {
            date,
            start,
            end,
            rate,
            dry_run,
        }) => {
            let mut service = open_tracker()?;
            let day = resolve_day(date.as_deref(), service.today())?;
            let overrides = NewEntry {
                start: start.as_deref().map(parse_time).transpose()?,
                end: end.as_deref().map(parse_time).transpose()?,
                rate,
            };
            let currency = service.config().currency.clone();

            if dry_run {
                // Preview only, nothing is saved
                let form = service.prepare_form(day, overrides);
                println!("Entry for {}", day.format("%d-%m-%Y"));
                print!("{}", format_form_summary(form.summary(), &currency));
                return Ok(());
            }

            let entry = service.add_entry(day, overrides)?;
            println!("Added entry for {}", day.format("%d-%m-%Y"));
            print!(
                "{}",
                format_entry_list(&[&entry], service.store().calendar(), &currency)
            );
            Ok(())
        }
        Some(Commands::List { date }) => {
            let service = open_tracker()?;
            let day = resolve_day(date.as_deref(), service.today())?;
            let store = service.store();
            let currency = &service.config().currency;
            let entries = store.entries_on_day(day);

            println!("{}", format_day_header(day));
            println!(
                "{}",
                format_entry_list(&entries, store.calendar(), currency).trim_end()
            );
            if !entries.is_empty() {
                // Day footer
                print!("{}", format_totals("Day", &store.totals_on_day(day), currency));
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut service = open_tracker()?;

            // Unknown ids are not an error
            match service.delete_entry(&id)? {
                StoreChange::Deleted(entry) => println!("Deleted entry {}", entry.id),
                _ => println!("No entry with id '{}'", id),
            }
            Ok(())
        }
        Some(Commands::Month { month, daily }) => {
            let service = open_tracker()?;
            let anchor = match month.as_deref() {
                Some(raw) => parse_month(raw)?,
                None => service.today(),
            };
            let store = service.store();
            let currency = &service.config().currency;

            println!("{}", anchor.format("%B %Y"));
            if daily {
                // Per-day breakdown before the month footer
                print!(
                    "{}",
                    format_daily_totals(&store.daily_totals_in_month(anchor), currency)
                );
            }
            print!(
                "{}",
                format_totals("Month", &store.totals_in_month(anchor), currency)
            );
            Ok(())
        }
        Some(Commands::Total) => {
            let service = open_tracker()?;
            print!(
                "{}",
                format_totals(
                    "All-time",
                    &service.store().totals_all(),
                    &service.config().currency
                )
            );
            Ok(())
        }
        Some(Commands::Calendar {
            month,
            select,
            shift,
        }) => {
            let service = open_tracker()?;
            let today = service.today();
            let selected = resolve_day(select.as_deref(), today)?;
            let anchor = match month.as_deref() {
                Some(raw) => parse_month(raw)?,
                None => selected,
            };
            // Previous/next month navigation
            let anchor = shift_month(anchor, shift);

            let grid = service.month_grid(anchor, selected);
            let theme = Theme::for_appearance(service.config().appearance);
            print!("{}", format_grid(&grid, theme));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            // Discover repository
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                // List all config
                let config = service.list()?;
                println!("first_weekday = {}", weekday_name(config.first_weekday));
                println!("currency = {}", config.currency);
                println!("appearance = {}", config.appearance);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    // Get config value
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                // No key provided, show usage
                println!("Usage: worktrack config [--list | <key> [<value>]]");
                println!("Valid keys: first_weekday, currency, appearance");
                Ok(())
            }
        }
        None => {
            // No command, show help
            println!("worktrack - personal work time tracker");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_tracker() -> Result<TrackerService> {
    let repo = FileSystemRepository::discover()?;
    TrackerService::open(&repo)
}

