use chrono::Datelike;
use clap::Parser;
use portfolio::{cli, config, contact, content, error, logging, render};
use portfolio_common::{Action, UiState};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let env_value = std::env::var(config::CONTENT_ENV).ok();
    let content_path = config.resolve_content_path(cli.content.as_deref(), env_value.as_deref());

    match cli.command {
        Commands::Projects { query } => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            let state = UiState::new().update(Action::SetQuery(query));
            let visible = state.visible(&portfolio.projects);
            print!("{}", render::project_list(&visible, &state.query));
        }

        Commands::Show { title } => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            let record = content::find_project(&portfolio, &title)?;
            let state = UiState::new().update(Action::Select(record));
            if let Some(record) = state.selection.selected() {
                print!("{}", render::project_details(record));
            }
        }

        Commands::Skills => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            print!("{}", render::skills(&portfolio.skills));
        }

        Commands::About => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            let year = chrono::Local::now().year();
            print!("{}", render::about(&portfolio.profile, year));
        }

        Commands::Contact { name, email, message } => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            let msg = contact::fill_interactively(name, email, message)?;
            let uri = contact::compose(&msg, config.recipient(&portfolio.profile.email))?;
            println!("{}", uri);
        }

        Commands::Check { file } => {
            let portfolio = content::load_portfolio(Some(&file))?;
            println!(
                "✔ {}: プロジェクト{}件 / スキルグループ{}件",
                file.display(),
                portfolio.projects.len(),
                portfolio.skills.len()
            );
        }

        Commands::Dump { output } => {
            let portfolio = content::load_portfolio(content_path.as_deref())?;
            let json = portfolio.to_json_pretty()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ 保存しました: {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Config { set_content, clear_content, set_contact_email, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(path) = set_content {
                // 保存前に読めることを確認
                content::load_portfolio(Some(&path))?;
                config.content_path = Some(path);
                changed = true;
            }

            if clear_content {
                config.content_path = None;
                changed = true;
            }

            if let Some(email) = set_contact_email {
                config.contact_email = Some(email);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                let profile_email = content::profile_email(config.content_path.as_deref());
                let recipient = match (&config.contact_email, profile_email) {
                    (Some(email), _) if !email.trim().is_empty() => email.clone(),
                    (_, Ok(email)) => email,
                    (_, Err(e)) => format!("（コンテンツ読み込み失敗: {}）", e),
                };
                println!("設定:");
                println!(
                    "  コンテンツ: {}",
                    config
                        .content_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  宛先: {}", recipient);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
