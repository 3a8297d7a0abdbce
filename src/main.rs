use anyhow::Result;
use authforms::api_checks::Expectation;
use authforms::config::Settings;
use authforms::fixtures::{invalid_emails, invalid_phones, weak_passwords};
use authforms::{FormData, FormMode};
use derive_more::Display;
use dotenv::dotenv;
use inquire::{Confirm, CustomType, Password, Select, Text};
use log::info;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu. `enter` returns None to leave, Some(()) to show it again.
trait Menu {
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it asks to leave, reporting errors on the way
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

struct App {
    settings: Settings,
}

impl App {
    fn new(settings: Settings) -> Self {
        App { settings }
    }

    fn start(&mut self) {
        println!("authforms: sign-up / sign-in form checks and fixtures.");
        self.enter_loop();
    }

    fn check_form(&self) -> Result<()> {
        let mode = Select::new("Form keyed by:", FormMode::iter().collect()).prompt()?;

        let identity = Text::new(&format!("{mode}:")).prompt()?;
        let password = Password::new("Password:")
            .without_confirmation()
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .prompt()?;
        let subscribe = Confirm::new("Subscribe to the newsletter?")
            .with_default(false)
            .prompt()?;

        let form = match mode {
            FormMode::Email => FormData::new().with_email(identity),
            FormMode::Phone => FormData::new().with_phone(identity),
        }
        .with_password(password)
        .with_subscribe(subscribe);

        print_json(&self.settings.policy.validate_form(&form, mode))
    }

    fn check_password(&self) -> Result<()> {
        let password = Password::new("Password:")
            .without_confirmation()
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .prompt()?;

        print_json(&self.settings.policy.validate(&password))
    }

    fn generate_fixtures(&self) -> Result<()> {
        let mode = Select::new("Form keyed by:", FormMode::iter().collect()).prompt()?;
        let count = CustomType::<usize>::new("How many?")
            .with_default(1)
            .prompt()?;

        let forms: Vec<FormData> = (0..count)
            .map(|_| FormData::random_with(&self.settings.policy, mode))
            .collect();

        info!("Generated {} {} fixture(s)", forms.len(), mode);
        print_json(&forms)
    }

    fn show_invalid_fixtures(&self) -> Result<()> {
        #[derive(Serialize)]
        struct Catalog {
            emails: Vec<&'static str>,
            phones: Vec<&'static str>,
            passwords: Vec<&'static str>,
        }

        print_json(&Catalog {
            emails: invalid_emails(),
            phones: invalid_phones(),
            passwords: weak_passwords().into_iter().map(|(p, _)| p).collect(),
        })
    }

    fn check_status(&self) -> Result<()> {
        let expectation = Select::new(
            "Expected answer:",
            vec![
                Expectation::Success,
                Expectation::ClientError,
                Expectation::RateLimited,
                Expectation::NoContent,
            ],
        )
        .prompt()?;
        let code = CustomType::<u16>::new("Observed status code:").prompt()?;

        expectation.check_code(code)?;
        println!("{code} matches {expectation}");
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Validate a form")]
            CheckForm,
            #[display("Check a password")]
            CheckPassword,
            #[display("Generate valid fixtures")]
            GenerateFixtures,
            #[display("Show invalid fixtures")]
            InvalidFixtures,
            #[display("Check an API status code")]
            CheckStatus,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::CheckForm => self.check_form()?,
            Choice::CheckPassword => self.check_password()?,
            Choice::GenerateFixtures => self.generate_fixtures()?,
            Choice::InvalidFixtures => self.show_invalid_fixtures()?,
            Choice::CheckStatus => self.check_status()?,
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    info!("Minimum password length: {}", settings.policy.min_length);

    App::new(settings).start();
    Ok(())
}
