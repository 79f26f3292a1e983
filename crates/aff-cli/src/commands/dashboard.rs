use aff_core::entities::{Balance, Order};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::api_outcome;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DashboardResponse {
    display_name: String,
    email: String,
    balance: Balance,
    order_count: usize,
    orders: Vec<Order>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(session) = ctx.guard() else {
        return Ok(());
    };

    let loaded = tokio::try_join!(ctx.client.balance(&session), ctx.client.orders(&session));
    let Some((balance, orders)) = ctx.settle(api_outcome(loaded)) else {
        return Ok(());
    };

    output(
        &DashboardResponse {
            display_name: session.display_name,
            email: session.email,
            balance,
            order_count: orders.len(),
            orders,
        },
        flags.format,
    )
}
