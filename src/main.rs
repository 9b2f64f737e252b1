//! One-shot command-line shell around the catalog core.
//!
//! Loads a page the same way a browser view would: decode the query string,
//! hit the API, print the result. Useful for poking at the live service and
//! as the routing boundary where service errors turn into user-facing
//! outcomes.

use std::env;

use config::Config;
use dotenvy::dotenv;

use shopdb_catalog::domain::types::TradeType;
use shopdb_catalog::models::config::ClientConfig;
use shopdb_catalog::pagination::Paginated;
use shopdb_catalog::query::{
    PlayerDetailQuery, PlayerQuery, QueryState, RegionDetailQuery, RegionQuery, ShopQuery,
};
use shopdb_catalog::repository::ShopDbApi;
use shopdb_catalog::search;
use shopdb_catalog::services::{self, ServiceError};

const USAGE: &str = "\
Usage: shopdb-catalog <command> [arguments]

Commands:
  shops [QUERY]                      list chest shops
  regions [QUERY]                    list regions
  players [QUERY]                    list players
  region <name> [QUERY]              region detail with its active tab
  player <name> [QUERY]              player detail with its active tab
  suggest <shops|regions|players> <text> [QUERY]
                                     search suggestions for the given input

QUERY is a URL query string, e.g. \"tradeType=sell&q=Diamond&page=2\".";

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let settings = Config::builder()
        .add_source(config::File::with_name("shopdb").required(false))
        .add_source(config::Environment::with_prefix("SHOPDB"))
        .build();

    let client_config = match settings.and_then(|s| s.try_deserialize::<ClientConfig>()) {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading configuration: {err}");
            std::process::exit(1);
        }
    };

    let api = match ShopDbApi::new(&client_config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Error setting up the API client: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();

    match dispatch(&api, &args).await {
        Ok(()) => {}
        Err(CommandError::Usage) => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
        Err(CommandError::Service(ServiceError::PlayerNotFound)) => {
            println!("No player with that name was found.");
            std::process::exit(2);
        }
        Err(CommandError::Service(ServiceError::RegionNotFound)) => {
            println!("No region with that name was found.");
            std::process::exit(2);
        }
        Err(CommandError::Service(err)) => {
            // Keep the detail in the log; the printed message stays generic.
            log::error!("page load failed: {err}");
            eprintln!("Something went wrong while talking to the API.");
            std::process::exit(1);
        }
    }
}

enum CommandError {
    Usage,
    Service(ServiceError),
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        CommandError::Service(err)
    }
}

async fn dispatch(api: &ShopDbApi, args: &[String]) -> Result<(), CommandError> {
    let command = args.first().map(String::as_str).ok_or(CommandError::Usage)?;
    let rest = &args[1..];

    match command {
        "shops" => {
            let query = ShopQuery::decode(rest.first().map(String::as_str).unwrap_or(""));
            let data = services::shops::load_page(api, &query).await?;
            for shop in &data.shops.items {
                let price = match query.trade_type {
                    TradeType::Buy => shop.buy_price,
                    TradeType::Sell => shop.sell_price,
                };
                println!(
                    "{} x{} for ${} by {} in {} ({})",
                    shop.material, shop.quantity, price, shop.owner.name, shop.town.name,
                    shop.server
                );
            }
            print_range(&data.shops);
            Ok(())
        }
        "regions" => {
            let query = RegionQuery::decode(rest.first().map(String::as_str).unwrap_or(""));
            let data = services::regions::load_page(api, &query).await?;
            for region in &data.regions.items {
                println!(
                    "{} on {}: {} chest shops, {} mayors{}",
                    region.name,
                    region.server,
                    region.num_chest_shops,
                    region.num_mayors,
                    if region.active { "" } else { " (unlisted)" }
                );
            }
            print_range(&data.regions);
            Ok(())
        }
        "players" => {
            let query = PlayerQuery::decode(rest.first().map(String::as_str).unwrap_or(""));
            let data = services::players::load_page(api, &query).await?;
            for player in &data.players.items {
                println!(
                    "{}: {} chest shops, {} regions",
                    player.name, player.num_chest_shops, player.num_regions
                );
            }
            print_range(&data.players);
            Ok(())
        }
        "region" => {
            let name = rest.first().ok_or(CommandError::Usage)?;
            let query = RegionDetailQuery::decode(rest.get(1).map(String::as_str).unwrap_or(""));
            let data = services::regions::load_detail(api, name, &query).await?;
            let region = &data.region;
            println!(
                "{} on {}: {} chest shops, {} mayors, last updated {}",
                region.name,
                region.server,
                region.num_chest_shops,
                region.mayors.len(),
                region.last_updated
            );

            match query.tab.trade_type() {
                Some(trade_type) => {
                    let shops = services::regions::chest_shops(api, name, &query, trade_type)
                        .await?;
                    for shop in &shops.items {
                        println!("  {} x{} by {}", shop.material, shop.quantity, shop.owner.name);
                    }
                    print_range(&shops);
                }
                None => {
                    let mayors = services::regions::mayors(api, name, &query).await?;
                    for mayor in &mayors.items {
                        println!("  {}", mayor.name);
                    }
                    print_range(&mayors);
                }
            }
            Ok(())
        }
        "player" => {
            let name = rest.first().ok_or(CommandError::Usage)?;
            let query = PlayerDetailQuery::decode(rest.get(1).map(String::as_str).unwrap_or(""));
            let data = services::players::load_detail(api, name).await?;
            println!(
                "{}: {} chest shops, {} regions",
                data.player.name, data.player.num_chest_shops, data.player.num_regions
            );

            match query.tab.trade_type() {
                Some(trade_type) => {
                    let shops =
                        services::players::chest_shops(api, name, &query, trade_type).await?;
                    for shop in &shops.items {
                        println!("  {} x{} in {}", shop.material, shop.quantity, shop.town.name);
                    }
                    print_range(&shops);
                }
                None => {
                    let regions = services::players::regions(api, name, &query).await?;
                    for region in &regions.items {
                        println!("  {} ({})", region.name, region.server);
                    }
                    print_range(&regions);
                }
            }
            Ok(())
        }
        "suggest" => {
            let target = rest.first().map(String::as_str).ok_or(CommandError::Usage)?;
            let text = rest.get(1).map(String::as_str).ok_or(CommandError::Usage)?;
            let query_str = rest.get(2).map(String::as_str).unwrap_or("");

            let candidates = match target {
                "shops" => {
                    let query = ShopQuery::decode(query_str);
                    services::shops::material_names(api, &query).await?
                }
                "regions" => {
                    let query = RegionQuery::decode(query_str);
                    services::regions::region_names(api, &query).await?
                }
                "players" => services::players::player_names(api).await?,
                _ => return Err(CommandError::Usage),
            };

            for suggestion in search::rank(text, &candidates) {
                println!("{}", suggestion.value);
            }
            Ok(())
        }
        _ => Err(CommandError::Usage),
    }
}

fn print_range<T>(page: &Paginated<T>) {
    println!(
        "Showing {} to {} of {} entries (page {})",
        page.start(),
        page.end(),
        page.total_elements,
        page.page
    );
}
