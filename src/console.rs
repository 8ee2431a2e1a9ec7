use crate::error::{DashboardError, DashboardResult};
use crate::models::Customer;
use crate::repositories::customer_repository;
use crate::services::chart_renderer::{ChartRenderer, ChartSurface, RenderOutcome};
use crate::services::data_loader::{self, DataSource};
use crate::state::DashboardState;
use log::{info, warn};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP: &str = "\
commands:
  name [text]      filter customers by name (no text clears)
  amount [number]  filter by exact transaction amount (no number clears)
  clear            clear both filters
  list             show the visible customers
  select <id>      chart a customer's totals per date
  tx <id>          list a customer's transactions
  reload           fetch the data again
  status           show the load state
  help             show this text
  quit             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Name(String),
    Amount(Option<f64>),
    Clear,
    List,
    Select(i64),
    Transactions(i64),
    Reload,
    Status,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> DashboardResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "name" => Command::Name(rest.to_string()),
        "amount" if rest.is_empty() => Command::Amount(None),
        "amount" => Command::Amount(Some(parse_number(rest)?)),
        "clear" => Command::Clear,
        "list" | "ls" => Command::List,
        "select" => Command::Select(parse_id(rest)?),
        "tx" => Command::Transactions(parse_id(rest)?),
        "reload" => Command::Reload,
        "status" => Command::Status,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(DashboardError::InvalidCommand(format!(
                "unknown command '{}'",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn parse_number(raw: &str) -> DashboardResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| DashboardError::InvalidCommand(format!("'{}' is not a number", raw)))
}

fn parse_id(raw: &str) -> DashboardResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| DashboardError::InvalidCommand(format!("'{}' is not a customer id", raw)))
}

pub struct Console<'a, S: ChartSurface, W: Write> {
    state: DashboardState,
    renderer: ChartRenderer<S>,
    source: &'a dyn DataSource,
    out: W,
}

impl<'a, S: ChartSurface, W: Write> Console<'a, S, W> {
    pub fn new(
        state: DashboardState,
        renderer: ChartRenderer<S>,
        source: &'a dyn DataSource,
        out: W,
    ) -> Self {
        Self {
            state,
            renderer,
            source,
            out,
        }
    }

    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> DashboardResult<()> {
        let mut lines = input.lines();
        write!(self.out, "> ")?;
        self.out.flush()?;
        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await?,
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", e);
                    writeln!(self.out, "{}", e)?;
                }
            }
            write!(self.out, "> ")?;
            self.out.flush()?;
        }
        self.renderer.teardown();
        Ok(())
    }

    pub async fn execute(&mut self, command: Command) -> DashboardResult<()> {
        match command {
            Command::Name(text) => {
                self.state.set_name_filter(&text);
                self.print_customers()?;
            }
            Command::Amount(amount) => {
                self.state.set_amount_filter(amount);
                self.print_customers()?;
            }
            Command::Clear => {
                self.state.clear_filter();
                self.print_customers()?;
            }
            Command::List => self.print_customers()?,
            Command::Select(id) => {
                self.state.select_customer(Some(id));
                self.redraw()?;
            }
            Command::Transactions(id) => self.print_transactions(id)?,
            Command::Reload => {
                if let Err(e) = data_loader::load(self.source, &mut self.state).await {
                    writeln!(self.out, "reload failed: {}", e)?;
                } else {
                    writeln!(self.out, "{}", self.state.load_state())?;
                    self.redraw()?;
                }
            }
            Command::Status => {
                writeln!(self.out, "{}", self.state.load_state())?;
                let chart = if self.renderer.has_chart() { "drawn" } else { "none" };
                writeln!(
                    self.out,
                    "chart on '{}': {}",
                    self.renderer.surface().canvas_id(),
                    chart
                )?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn redraw(&mut self) -> DashboardResult<()> {
        let outcome = self
            .renderer
            .render(self.state.transactions(), self.state.selected_customer_id());
        match outcome {
            RenderOutcome::Skipped | RenderOutcome::Drawn(_) => {}
            RenderOutcome::SurfaceUnavailable => {
                writeln!(self.out, "chart unavailable: no drawing context")?
            }
            RenderOutcome::Failed(reason) => writeln!(self.out, "chart failed: {}", reason)?,
        }
        Ok(())
    }

    fn print_customers(&mut self) -> DashboardResult<()> {
        let customers: &[Customer] = self.state.filtered_customers();
        if !self.state.filter().is_empty() {
            writeln!(
                self.out,
                "{} of {} customers match",
                customers.len(),
                self.state.customers().len()
            )?;
        }
        if customers.is_empty() {
            writeln!(self.out, "no matching customers")?;
        }
        for customer in customers {
            let marker = if Some(customer.id) == self.state.selected_customer_id() {
                '*'
            } else {
                ' '
            };
            writeln!(self.out, "{} {:>4}  {}", marker, customer.id, customer.name)?;
        }
        Ok(())
    }

    fn print_transactions(&mut self, customer_id: i64) -> DashboardResult<()> {
        let transactions =
            customer_repository::transactions_for_customer(self.state.transactions(), customer_id);
        info!(
            "Customer {} has {} transactions",
            customer_id,
            transactions.len()
        );
        if transactions.is_empty() {
            writeln!(self.out, "no transactions for customer {}", customer_id)?;
        }
        for t in transactions {
            writeln!(self.out, "{:>4}  {}  {:>10}", t.id, t.date, t.amount)?;
        }
        Ok(())
    }
}
