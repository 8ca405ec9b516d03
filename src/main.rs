use clap::Parser;
use skillboard::utils::logger;
use skillboard::{
    CachedStore, CliConfig, Command, Directory, MatchPolicy, MemoryStore, Roster, SkillCatalog,
    UserStore,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting skillboard CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let roster = match Roster::from_file(&config.roster) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster {}: {}", config.roster.display(), e);
            eprintln!("❌ {}: {}", config.roster.display(), e);
            std::process::exit(1);
        }
    };

    // from_roster validates before materializing anything.
    let store = match MemoryStore::from_roster(&roster) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Roster validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let directory = Directory::new(CachedStore::new(store));

    if let Err(e) = run(&directory, config.command).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        let exit_code = if e.is_not_found() { 2 } else { 1 };
        std::process::exit(exit_code);
    }
}

async fn run<S: SkillCatalog + UserStore>(
    directory: &Directory<S>,
    command: Command,
) -> skillboard::Result<()> {
    match command {
        Command::Users { csv } => {
            let rows = directory.roster_rows().await?;

            println!("{:<20} {:<24} {:>6}  {}", "USERNAME", "NAME", "SKILLS", "AREAS");
            for row in &rows {
                println!(
                    "{:<20} {:<24} {:>6}  {}",
                    row.username, row.display_name, row.skill_count, row.areas
                );
            }
            println!("{} user(s)", rows.len());

            if let Some(path) = csv {
                let file = std::fs::File::create(&path)?;
                skillboard::core::write_csv(&rows, file)?;
                println!("📁 Roster exported to: {}", path.display());
            }
        }

        Command::Show { username } => {
            let profile = directory.profile(&username).await?;
            println!("{} ({})", profile.user.label(), profile.user.username);

            if profile.has_no_skills() {
                println!("No skills recorded yet.");
                return Ok(());
            }

            // Stable ordering is a display concern only; the projection
            // itself guarantees none.
            let mut titles: Vec<&String> = profile.skills_by_area.keys().collect();
            titles.sort();
            for title in titles {
                println!("{}", title);
                for skill in &profile.skills_by_area[title] {
                    println!("  - {}", skill.name);
                }
            }
        }

        Command::Search {
            query,
            match_all,
            json,
        } => {
            let policy = if match_all {
                MatchPolicy::All
            } else {
                MatchPolicy::Any
            };
            let outcome = directory.search(&query.join(" "), policy).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.matched)?);
                return Ok(());
            }

            if !outcome.ignored.is_empty() {
                println!("Ignored unrecognized skill(s): {}", outcome.ignored.join(", "));
            }
            let requested: Vec<&str> = outcome.requested.iter().map(|s| s.name.as_str()).collect();
            println!("Searched for: {}", requested.join(", "));

            if outcome.matched.is_empty() {
                println!("No matching users.");
            } else {
                let mut usernames: Vec<&str> =
                    outcome.matched.iter().map(|u| u.username.as_str()).collect();
                usernames.sort();
                for username in usernames {
                    println!("  {}", username);
                }
                println!("{} match(es)", outcome.matched.len());
            }
        }

        Command::AddUser {
            username,
            name,
            skills,
        } => {
            let user = directory.add_user(&username, name, &skills).await?;
            println!(
                "✅ Saved user {} with {} skill(s)",
                user.username,
                user.skill_ids.len()
            );
        }
    }

    Ok(())
}
