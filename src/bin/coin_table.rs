use anyhow::{Context, Result};
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use cryptoscope::analysis::catalog::CatalogQuery;
use cryptoscope::utils::{LocaleFormat, MoneyFormat, percent};
use cryptoscope::{CoinGeckoProvider, Coin, Currency, MARKET, MarketDataProvider};

/// Print one page of the top-100 coin catalog as a table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Currency::Usd)]
    currency: Currency,

    #[arg(long, default_value = MARKET.base_url)]
    api_base_url: String,

    /// Case-insensitive match against name or symbol
    #[arg(long, default_value = "")]
    query: String,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Tabled)]
struct CoinRow {
    #[tabled(rename = "#")]
    rank: String,
    #[tabled(rename = "Coin")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "24h %")]
    change: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
    #[tabled(rename = "Volume (24h)")]
    volume: String,
}

impl CoinRow {
    fn new(coin: &Coin, fmt: &dyn MoneyFormat) -> Self {
        Self {
            rank: coin.rank_label(),
            name: coin.name.clone(),
            symbol: coin.ticker(),
            price: fmt.price(coin.current_price),
            change: percent(coin.price_change_percentage_24h),
            market_cap: fmt.compact(coin.market_cap),
            volume: fmt.compact(coin.total_volume),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let provider = CoinGeckoProvider::with_base_url(args.api_base_url.as_str())
        .context("Failed to build HTTP client")?;

    log::info!(
        "Fetching top {} coins in {} from {}",
        MARKET.catalog_size,
        args.currency,
        provider.base_url()
    );
    let coins = provider
        .list_markets(args.currency, 1, MARKET.catalog_size)
        .await
        .context("Failed to fetch market listing")?;

    let mut query = CatalogQuery::new(MARKET.page_size);
    query.set_query(args.query.as_str());
    let total = query.apply(&coins).total_pages;
    query.set_page(args.page, total);
    let page = query.apply(&coins);

    if page.is_empty() {
        println!("No coins found matching your search.");
        return Ok(());
    }

    let fmt = LocaleFormat::new(args.currency);
    let rows: Vec<CoinRow> = page.rows.iter().map(|c| CoinRow::new(c, &fmt)).collect();
    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("page {} of {}", page.page, page.total_pages);

    Ok(())
}
