use crate::config::AppConfig;
use crate::dashboards::d400_order_summary::api;
use crate::shared::components::{BarChart, CardTone, StatCard};
use crate::shared::date_utils::format_day_month;
use crate::shared::icons::Icon;
use crate::shared::number_format::{format_currency, format_number_int};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::dashboards::d400_order_summary::{DailySales, OrderMetrics};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Order summary dashboard: three metric cards and the daily sales chart
#[component]
pub fn OrderSummaryDashboard() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let base = config.api_base();

    let (metrics, set_metrics) = signal(None::<OrderMetrics>);
    let (sales, set_sales) = signal(None::<Vec<DailySales>>);
    let (sales_loading, set_sales_loading) = signal(true);
    let (sales_error, set_sales_error) = signal(None::<String>);

    {
        let base = base.clone();
        spawn_local(async move {
            match api::get_orders(&base).await {
                Ok(orders) => {
                    set_metrics.try_set(Some(OrderMetrics::from_orders(&orders)));
                }
                Err(e) => log::error!("d400: failed to load orders: {}", e),
            }
        });
    }

    spawn_local(async move {
        match api::get_daily_sales(&base).await {
            Ok(series) => {
                set_sales.try_set(Some(series));
            }
            Err(e) => {
                log::error!("d400: failed to load daily sales: {}", e);
                set_sales_error.try_set(Some("Erro ao carregar as vendas diárias.".to_string()));
            }
        }
        set_sales_loading.try_set(false);
    });

    let total_orders =
        Signal::derive(move || metrics.get().map(|m| format_number_int(m.total_orders as f64)));
    let total_value = Signal::derive(move || metrics.get().map(|m| format_currency(m.total_value)));
    let average_value =
        Signal::derive(move || metrics.get().map(|m| format_currency(m.average_value)));

    let points = Signal::derive(move || {
        sales.with(|s| {
            s.as_deref()
                .unwrap_or_default()
                .iter()
                .map(|day| (format_day_month(&day.date), day.total))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="d400_order_summary--dashboard" category=PageCategory::Dashboard>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard de Pedidos"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total de Pedidos"
                        icon_kind=Icon::TrendingUp
                        tone=CardTone::Blue
                        value=total_orders
                    />
                    <StatCard
                        label="Valor Total"
                        icon_kind=Icon::Wallet
                        tone=CardTone::Green
                        value=total_value
                    />
                    <StatCard
                        label="Média por Pedido"
                        icon_kind=Icon::Calculator
                        tone=CardTone::Red
                        value=average_value
                    />
                </div>

                <div class="chart-panel">
                    <h2 class="chart-panel__title">"Vendas Diárias do mês"</h2>
                    {move || {
                        if sales_loading.get() {
                            view! { <div class="chart-panel__loading"><Spinner /></div> }.into_any()
                        } else if let Some(e) = sales_error.get() {
                            view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <BarChart
                                    points=points
                                    format_value=Callback::new(format_currency)
                                />
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
