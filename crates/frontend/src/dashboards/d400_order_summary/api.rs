use crate::shared::api_utils::{ApiError, RestResource};
use contracts::dashboards::d400_order_summary::DailySales;
use contracts::domain::a003_order::Order;
use gloo_net::http::Request;

/// Every order, the source of the metric cards
pub async fn get_orders(base: &str) -> Result<Vec<Order>, ApiError> {
    RestResource::<Order>::new(base, "orders").all().await
}

/// Sales per day of the current month
pub async fn get_daily_sales(base: &str) -> Result<Vec<DailySales>, ApiError> {
    let url = daily_sales_url(base);
    let response = Request::get(&url).send().await?;

    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn daily_sales_url(base: &str) -> String {
    format!("{}/dashboard/dailysales", base.trim_end_matches('/'))
}
