//! Command dispatch and terminal output

use std::thread;

use color_eyre::eyre::{WrapErr, bail, eyre};
use finquest_core::batch::{AllocationStrategy, BatchConfig, run_batch};
use finquest_core::collaborators::NoMentor;
use finquest_core::model::{
    AchievementId, AssetCategory, Career, CategoryAmounts, GamePhase, GameState, MonthReport,
    Outcome, UserProfile,
};
use finquest_core::{GameRules, GameSession, SeededRandom};

use crate::cli::{Args, CareerArg, CategoryArgs, Command};
use crate::data::{DEFAULT_SLOT, DataConfig, DataDirectory, check_slot_name};
use crate::util::format::{
    format_change, format_compact_currency, format_currency, format_percentage, month_name,
};

type CliSession = GameSession<DataDirectory, NoMentor, SeededRandom>;

/// Run one CLI command against the data directory.
pub fn run(args: &Args, data_dir: DataDirectory, config: DataConfig) -> color_eyre::Result<()> {
    let rules = config.rules().wrap_err("invalid rules in config.yaml")?;
    let slot = args
        .slot
        .clone()
        .or_else(|| config.active_slot.clone())
        .unwrap_or_else(|| DEFAULT_SLOT.to_string());
    check_slot_name(&slot)?;

    tracing::debug!(?args.command, %slot, "running command");

    match &args.command {
        Command::New {
            name,
            career,
            salary,
            expenses,
            force,
        } => new_game(
            &data_dir, config, &slot, rules, name, *career, *salary, *expenses, *force,
        ),
        Command::Slots => list_slots(&data_dir, &slot),
        Command::Batch {
            iterations,
            months,
            seed,
            career,
            fractions,
        } => batch(&rules, *iterations, *months, *seed, *career, *fractions),
        command => {
            let mut session = open(&data_dir, &slot, rules)?;
            play(&mut session, command, &config)
        }
    }
}

fn open(data_dir: &DataDirectory, slot: &str, rules: GameRules) -> color_eyre::Result<CliSession> {
    GameSession::resume(
        slot,
        rules,
        data_dir.clone(),
        NoMentor,
        SeededRandom::from_entropy(),
    )
    .wrap_err_with(|| format!("no game in slot '{slot}'; start one with `finquest new --name <NAME>`"))
}

#[allow(clippy::too_many_arguments)]
fn new_game(
    data_dir: &DataDirectory,
    mut config: DataConfig,
    slot: &str,
    rules: GameRules,
    name: &str,
    career: CareerArg,
    salary: Option<f64>,
    expenses: Option<f64>,
    force: bool,
) -> color_eyre::Result<()> {
    if data_dir.has_save(slot) && !force {
        bail!("slot '{slot}' already has a game; pass --force to replace it");
    }

    let career = Career::from(career);
    let (preset_salary, preset_expenses) = career.preset();
    let profile = UserProfile::new(
        name,
        career,
        salary.unwrap_or(preset_salary),
        expenses.unwrap_or(preset_expenses),
    );
    if !profile.monthly_surplus().is_finite() {
        bail!("salary and expenses must be finite numbers");
    }

    let session = GameSession::onboard(
        slot,
        profile,
        rules,
        data_dir.clone(),
        NoMentor,
        SeededRandom::from_entropy(),
    );

    if config.active_slot.as_deref() != Some(slot) {
        config.active_slot = Some(slot.to_string());
        data_dir.save_config(&config)?;
    }

    tracing::info!(%slot, career = %session.state().profile.career, "new game");
    println!("Welcome, {name}! Your game is saved in slot '{slot}'.");
    print_status(session.state(), session.rules());
    Ok(())
}

fn play(session: &mut CliSession, command: &Command, config: &DataConfig) -> color_eyre::Result<()> {
    match command {
        Command::Status => print_status(session.state(), session.rules()),
        Command::Invest(amounts) => {
            let contributions = amounts.to_amounts();
            session.submit(&contributions)?;
            println!(
                "Invested {} this month. Closing the books...",
                format_currency(contributions.total())
            );
            thread::sleep(config.month_end_delay());
            let report = session.finish_month()?;
            print_report(session.state(), &report);
        }
        Command::Skip => {
            let report = if session.state().phase == GamePhase::Processing {
                println!("Finishing the month that was interrupted...");
                session.finish_month()?
            } else {
                session.skip_month()?
            };
            print_report(session.state(), &report);
        }
        Command::Login { date } => {
            let today = date.unwrap_or_else(|| jiff::Zoned::now().date());
            let report = session.login(today);
            if report.new_day {
                println!(
                    "Logged in on {today}: +{} XP, streak {} day(s).",
                    report.xp_gained, report.streak
                );
                print_unlocked(session.state(), &report.unlocked);
            } else {
                println!("Already logged in on {today}. Streak: {} day(s).", report.streak);
            }
        }
        Command::Achievements => print_achievements(session.state()),
        Command::History { last } => print_history(session.state(), *last),
        Command::Ask { message } => {
            let reply = session.ask(message);
            println!("Mentor: {reply}");
        }
        Command::Reset => {
            session.reset();
            println!("Game reset. A fresh start for {}.", session.state().profile.name);
            print_status(session.state(), session.rules());
        }
        Command::New { .. } | Command::Slots | Command::Batch { .. } => {
            return Err(eyre!("command does not act on a game session"));
        }
    }
    Ok(())
}

fn list_slots(data_dir: &DataDirectory, active: &str) -> color_eyre::Result<()> {
    let slots = data_dir.list_slots()?;
    if slots.is_empty() {
        println!("No saved games yet.");
    }
    for slot in slots {
        let marker = if slot == active { "*" } else { " " };
        println!("{marker} {slot}");
    }
    Ok(())
}

fn batch(
    rules: &GameRules,
    iterations: usize,
    months: u32,
    seed: u64,
    career: CareerArg,
    fractions: CategoryArgs,
) -> color_eyre::Result<()> {
    let strategy = AllocationStrategy::new(fractions.to_amounts()).ok_or_else(|| {
        eyre!("allocation fractions must be non-negative and sum to at most 1")
    })?;
    let profile = UserProfile::with_preset("Batch", career.into());
    let config = BatchConfig {
        iterations,
        max_months: months,
        seed,
    };

    let (_, summary) = run_batch(&profile, rules, &strategy, &config)?;

    let share = |n: usize| {
        if summary.runs == 0 {
            format_percentage(0.0)
        } else {
            format_percentage(n as f64 / summary.runs as f64)
        }
    };
    println!("{} games of up to {months} months as {}", summary.runs, profile.career);
    println!("  wins        {:>6}  ({})", summary.wins, share(summary.wins));
    println!("  losses      {:>6}  ({})", summary.losses, share(summary.losses));
    println!("  unfinished  {:>6}  ({})", summary.unfinished, share(summary.unfinished));
    println!(
        "  final net worth  p10 {}  p50 {}  p90 {}  mean {}",
        format_compact_currency(summary.p10_final_net_worth),
        format_compact_currency(summary.p50_final_net_worth),
        format_compact_currency(summary.p90_final_net_worth),
        format_compact_currency(summary.mean_final_net_worth),
    );
    if let Some(months) = summary.mean_months_to_win {
        println!("  average win after {months:.1} months");
    }
    Ok(())
}

fn print_portfolio(portfolio: &CategoryAmounts) {
    for category in AssetCategory::ALL {
        println!("  {:<12} {:>14}", category.label(), format_currency(portfolio.get(category)));
    }
}

fn print_status(state: &GameState, rules: &GameRules) {
    println!(
        "{} the {} | {} {} | Level {} ({} XP)",
        state.profile.name,
        state.profile.career,
        month_name(state.month),
        state.year,
        state.level,
        state.xp
    );
    println!(
        "Cash {}   Net worth {}   Goal {}",
        format_currency(state.cash),
        format_currency(state.net_worth),
        format_currency(rules.win_net_worth)
    );
    print_portfolio(&state.portfolio);
    if state.login_streak > 0 {
        println!("Login streak: {} day(s)", state.login_streak);
    }
    match state.phase {
        GamePhase::AwaitingContribution => {}
        GamePhase::Processing => println!("A month is still being processed; run `finquest skip`."),
        GamePhase::GameOver(outcome) => print_outcome(outcome),
    }
}

fn print_report(state: &GameState, report: &MonthReport) {
    println!(
        "{} {} closed.",
        month_name(report.closed_month),
        report.closed_year
    );
    for (category, gain) in report.returns.iter() {
        if gain != 0.0 {
            println!("  {:<12} {:>14}", category.label(), format_change(gain));
        }
    }
    println!("  {:<12} {:>14}", "Salary", format_change(report.surplus));
    if let Some(event) = &report.life_event {
        println!("  {:<12} {:>14}", event.name, format_change(event.impact));
    }
    println!(
        "Net worth {} ({})   +{} XP",
        format_currency(report.net_worth),
        format_change(report.net_worth - report.previous_net_worth),
        report.xp_gained
    );
    if report.leveled_up() {
        println!("Level up! You are now level {}.", report.level);
    }
    print_unlocked(state, &report.unlocked);
    if let Some(outcome) = report.outcome {
        print_outcome(outcome);
    }
}

fn print_unlocked(state: &GameState, unlocked: &[AchievementId]) {
    for id in unlocked {
        if let Some(achievement) = state.achievement(*id) {
            println!(
                "Achievement unlocked: {} {}",
                achievement.icon, achievement.title
            );
        }
    }
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Win => println!("You reached your goal. You win! Run `finquest reset` to play again."),
        Outcome::Loss => println!("Your debts caught up with you. Game over. Run `finquest reset` to try again."),
    }
}

fn print_achievements(state: &GameState) {
    for achievement in &state.achievements {
        let mark = if achievement.unlocked { "x" } else { " " };
        println!(
            "[{mark}] {} {:<16} {}",
            achievement.icon, achievement.title, achievement.description
        );
    }
}

fn print_history(state: &GameState, last: usize) {
    if state.history.is_empty() {
        println!("No months played yet.");
        return;
    }
    let skip = state.history.len().saturating_sub(last);
    for record in &state.history[skip..] {
        println!(
            "{} {}  cash {:>12}  invested {:>12}  net worth {:>12}  {}",
            month_name(record.month),
            record.year,
            format_currency(record.cash),
            format_currency(record.portfolio_value),
            format_currency(record.net_worth),
            record.life_event.as_deref().unwrap_or("")
        );
    }
}
