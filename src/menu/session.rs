use std::io::{BufRead, Write};

use log::info;

use super::{render, MenuChoice, Prompter};
use crate::error::{failure_message, AppError};
use crate::gateway::MarketGateway;
use crate::types::user::Signup;

/// What the loop does after a choice has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy)]
enum Trade {
    Buy,
    Sell,
}

/// The menu loop bound to one gateway and one terminal.
pub struct Session<G, R, W> {
    gateway: G,
    prompter: Prompter<R, W>,
}

impl<G, R, W> Session<G, R, W>
where
    G: MarketGateway,
    R: BufRead,
    W: Write,
{
    pub fn new(gateway: G, input: R, output: W) -> Self {
        Self {
            gateway,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (G, W) {
        (self.gateway, self.prompter.into_output())
    }

    /// Run until Exit is chosen or input ends at the menu prompt.
    ///
    /// Buy and sell failures are reported and the loop continues; any other
    /// error ends the session and is returned.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            let Some(choice) = self.prompter.read_choice()? else {
                info!("input closed at menu prompt, ending session");
                return Ok(());
            };
            if self.dispatch(choice).await? == Flow::Exit {
                return Ok(());
            }
        }
    }

    pub async fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, AppError> {
        match choice {
            MenuChoice::Signup => self.signup().await?,
            MenuChoice::Login => self.login().await?,
            MenuChoice::ListCompanies => self.list_companies().await?,
            MenuChoice::CompanyDetails => self.company_details().await?,
            MenuChoice::Buy => self.trade(Trade::Buy).await?,
            MenuChoice::Sell => self.trade(Trade::Sell).await?,
            MenuChoice::Portfolio => self.portfolio().await?,
            MenuChoice::Exit => {
                self.prompter.say("Exiting the application.")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::Invalid => self.prompter.say("Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    async fn signup(&mut self) -> Result<(), AppError> {
        let p = &mut self.prompter;
        let signup = Signup {
            username: p.ask("Enter username :", "username")?,
            password: p.ask("Enter password :", "password")?,
            email: p.ask("Enter email :", "email")?,
            bank_account: p.ask("Enter Bank Account :", "bank account")?,
            contact_number: p.ask("Enter contact number :", "contact number")?,
            wallet: p.ask_number("Enter wallet amount :", "wallet amount")?,
        };
        self.gateway.signup(&signup).await?;
        info!("signed up {}", signup.username);
        self.prompter.say("User signed up successfully!")?;
        Ok(())
    }

    async fn login(&mut self) -> Result<(), AppError> {
        let username = self.prompter.ask("Enter your username :", "username")?;
        let password = self.prompter.ask("Enter your password :", "password")?;
        match self.gateway.login(&username, &password).await? {
            Some(user_id) => self.prompter.say(format!("Login successful! User ID: {user_id}"))?,
            None => self.prompter.say("Login failed!")?,
        }
        Ok(())
    }

    async fn list_companies(&mut self) -> Result<(), AppError> {
        let companies = self.gateway.list_companies().await?;
        render::company_list(self.prompter.output(), &companies)?;
        Ok(())
    }

    /// Look up companies until the user answers `#`.
    async fn company_details(&mut self) -> Result<(), AppError> {
        loop {
            let company_id: i32 = self.prompter.ask_number("Enter company ID:", "company ID")?;
            let detail = self.gateway.company_by_id(company_id).await?;
            render::company_detail(self.prompter.output(), company_id, detail.as_ref())?;
            let answer = self.prompter.ask(
                "Do you want to view another company details? Type 'Y' to continue or '#' to exit.",
                "continue answer",
            )?;
            if answer == "#" {
                return Ok(());
            }
        }
    }

    async fn trade(&mut self, trade: Trade) -> Result<(), AppError> {
        let p = &mut self.prompter;
        let user_id: i32 = p.ask_number("Enter your user ID:", "user ID")?;
        let (company_prompt, quantity_prompt) = match trade {
            Trade::Buy => (
                "Enter the company ID you want to buy:",
                "Enter the number of stocks you want to buy:",
            ),
            Trade::Sell => (
                "Enter company ID you want to sell:",
                "Enter the number of stocks you want to sell:",
            ),
        };
        let company_id: i32 = p.ask_number(company_prompt, "company ID")?;
        let quantity: i32 = p.ask_number(quantity_prompt, "quantity")?;

        let result = match trade {
            Trade::Buy => self.gateway.buy_stock(user_id, company_id, quantity).await,
            Trade::Sell => self.gateway.sell_stock(user_id, company_id, quantity).await,
        };
        match (result, trade) {
            (Ok(()), Trade::Buy) => self
                .prompter
                .say(format!("Stock purchase successfully for user {user_id}"))?,
            (Ok(()), Trade::Sell) => self
                .prompter
                .say(format!("Stock sold successfully for user {user_id}"))?,
            (Err(err), _) => {
                info!("{trade:?} rejected for user {user_id}: {err}");
                self.prompter.say(failure_message(&err))?;
            }
        }
        Ok(())
    }

    async fn portfolio(&mut self) -> Result<(), AppError> {
        let user_id: i32 = self
            .prompter
            .ask_number("Enter user ID to view Portfolio :", "user ID")?;
        let rows = self.gateway.portfolio(user_id).await?;
        render::portfolio(self.prompter.output(), user_id, &rows)?;
        Ok(())
    }
}
