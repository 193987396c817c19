//! # Commands Module
//!
//! Every action the terminal storefront understands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (parsing & dispatch)
//! ├── product.rs   ◄─── Product list, lookup, new-product form
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Payment
//! ├── currency.rs  ◄─── Currency picker
//! └── config.rs    ◄─── Configuration & JSON snapshot
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "add 100"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse ──► Command::Add(ProductId(100))                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  execute(command, &config, &mut state)                                  │
//! │         │  one store operation                                          │
//! │         ▼                                                               │
//! │  Reply::Cart(CartResponse) ──► view::render ──► stdout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod currency;
pub mod product;

use storefront_core::validation::validate_product_id;
use storefront_core::{Currency, PaymentOutcome, Product, ProductId};

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use cart::CartResponse;
use product::NewProductArgs;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Show(ProductId),
    Cart,
    Add(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Remove(ProductId),
    Empty,
    Pay(String),
    Currency(Option<String>),
    NextId,
    NewProduct(NewProductArgs),
    Config,
    Json,
    Help,
    Quit,
}

/// What a command produced, for the view to draw.
#[derive(Debug, Clone)]
pub enum Reply {
    Products(Vec<Product>),
    Product(Product),
    Cart(CartResponse),
    Payment(PaymentOutcome),
    CurrencySelected(Currency),
    Currencies(Vec<(Currency, bool)>),
    NextId(ProductId),
    ProductAdded(Product),
    Config(ConfigState),
    Json(String),
    Help,
    Quit,
}

impl Command {
    /// Parses one line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "products" | "ls" => no_args(&args, "products", Command::Products)?,
            "show" => Command::Show(one_id(&args, "show <id>")?),
            "cart" => no_args(&args, "cart", Command::Cart)?,
            "add" => Command::Add(one_id(&args, "add <id>")?),
            "inc" => Command::Increase(one_id(&args, "inc <id>")?),
            "dec" => Command::Decrease(one_id(&args, "dec <id>")?),
            "remove" | "rm" => Command::Remove(one_id(&args, "remove <id>")?),
            "empty" => no_args(&args, "empty", Command::Empty)?,
            "pay" => match args.as_slice() {
                [amount] => Command::Pay(amount.to_string()),
                _ => return Err(ApiError::usage("pay <amount>")),
            },
            "currency" => match args.as_slice() {
                [] => Command::Currency(None),
                [code] => Command::Currency(Some(code.to_string())),
                _ => return Err(ApiError::usage("currency [USD|EUR|YEN]")),
            },
            "new-id" => no_args(&args, "new-id", Command::NextId)?,
            "new" => match args.as_slice() {
                [id, price, image, name @ ..] if !name.is_empty() => {
                    Command::NewProduct(NewProductArgs {
                        id: id.to_string(),
                        price: price.to_string(),
                        image: image.to_string(),
                        name: name.join(" "),
                    })
                }
                _ => return Err(ApiError::usage("new <id> <price> <image> <name...>")),
            },
            "config" => no_args(&args, "config", Command::Config)?,
            "json" => no_args(&args, "json", Command::Json)?,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ApiError::unknown_command(other)),
        };

        Ok(Some(command))
    }
}

fn no_args(args: &[&str], usage: &str, command: Command) -> Result<Command, ApiError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ApiError::usage(usage))
    }
}

fn one_id(args: &[&str], usage: &str) -> Result<ProductId, ApiError> {
    match args {
        [raw] => parse_product_id(raw),
        _ => Err(ApiError::usage(usage)),
    }
}

/// Parses a product id argument. Ids that are well-formed but not in the
/// catalog pass; the store treats them as no-ops.
pub fn parse_product_id(raw: &str) -> Result<ProductId, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::validation(format!("'{}' is not a product id", raw)))?;
    Ok(validate_product_id(id)?)
}

/// Runs one command against the store.
pub fn execute(
    command: Command,
    config: &ConfigState,
    state: &mut StoreState,
) -> Result<Reply, ApiError> {
    let reply = match command {
        Command::Products => Reply::Products(product::list_products(state)),
        Command::Show(id) => Reply::Product(product::get_product(state, id)?),
        Command::Cart => Reply::Cart(cart::get_cart(state)),
        Command::Add(id) => Reply::Cart(cart::add_to_cart(state, id)),
        Command::Increase(id) => Reply::Cart(cart::increase_quantity(state, id)),
        Command::Decrease(id) => Reply::Cart(cart::decrease_quantity(state, id)),
        Command::Remove(id) => Reply::Cart(cart::remove_from_cart(state, id)),
        Command::Empty => Reply::Cart(cart::empty_cart(state)),
        Command::Pay(amount) => Reply::Payment(checkout::pay(state, &amount)?),
        Command::Currency(Some(code)) => {
            Reply::CurrencySelected(currency::set_currency(state, &code))
        }
        Command::Currency(None) => Reply::Currencies(currency::list_currencies(state)),
        Command::NextId => Reply::NextId(product::next_product_id(state)),
        Command::NewProduct(args) => Reply::ProductAdded(product::add_product(state, args)?),
        Command::Config => Reply::Config(config::get_config(config)),
        Command::Json => Reply::Json(config::snapshot_json(config, state)?),
        Command::Help => Reply::Help,
        Command::Quit => Reply::Quit,
    };
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::Store;

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("add 100").unwrap(), Some(Command::Add(id(100))));
        assert_eq!(Command::parse("INC 200").unwrap(), Some(Command::Increase(id(200))));
        assert_eq!(Command::parse("pay 12.50").unwrap(), Some(Command::Pay("12.50".into())));
        assert_eq!(Command::parse("currency").unwrap(), Some(Command::Currency(None)));
        assert_eq!(
            Command::parse("currency eur").unwrap(),
            Some(Command::Currency(Some("eur".into())))
        );
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_new_product_joins_name() {
        let command = Command::parse("new 4400 90 crown Golden  Crown").unwrap();
        assert_eq!(
            command,
            Some(Command::NewProduct(NewProductArgs {
                id: "4400".into(),
                price: "90".into(),
                image: "crown".into(),
                name: "Golden Crown".into(),
            }))
        );

        let err = Command::parse("new 4400 90 crown").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("dance").unwrap_err().code, ErrorCode::UnknownCommand);
        assert_eq!(Command::parse("add").unwrap_err().code, ErrorCode::InvalidArguments);
        assert_eq!(Command::parse("add 1 2").unwrap_err().code, ErrorCode::InvalidArguments);
        assert_eq!(Command::parse("add apple").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(Command::parse("add 0").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(Command::parse("empty now").unwrap_err().code, ErrorCode::InvalidArguments);
    }

    #[test]
    fn test_execute_flow() {
        let config = ConfigState::default();
        let mut state = StoreState::new(Store::seeded());

        let reply = execute(Command::Add(id(100)), &config, &mut state).unwrap();
        assert!(matches!(reply, Reply::Cart(ref cart) if cart.totals.total.cents() == 50));

        let reply = execute(Command::Pay("1".into()), &config, &mut state).unwrap();
        assert!(matches!(reply, Reply::Payment(outcome) if outcome.change_due().cents() == 50));

        let err = execute(Command::Show(id(150)), &config, &mut state).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
