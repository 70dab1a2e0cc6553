//! Invoices for the active owner, with summary stats and invoice generation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoices are reached through appointment -> pet -> owner. The amount shown
//! on each card is recomputed from the appointment's service prices when the
//! appointment carries them, since the stored total may be missing.
//!
//! Completed appointments without an invoice can be invoiced from the
//! "Generate Invoice" panel; the backend computes the stored total.

#[cfg(test)]
#[path = "invoices_test.rs"]
mod invoices_test;

use std::collections::HashSet;

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant, block_link_class};
use crate::components::card::Card;
use crate::components::empty_state::EmptyState;
use crate::components::skeleton::Skeleton;
use crate::net::api;
use crate::net::types::{Appointment, Invoice, Pet};
use crate::state::portfolio::{OwnerPortfolio, pet_name};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::dates;
use crate::util::format::{format_money, sum_prices};

/// Amount to show for `invoice`: the appointment's service sum when it has
/// services, else the stored total (0 when absent).
pub fn invoice_display_total(invoice: &Invoice, appointment: Option<&Appointment>) -> f64 {
    match appointment {
        Some(a) if !a.services.is_empty() => sum_prices(a.services.iter().map(|s| s.price)),
        _ => invoice.total.unwrap_or(0.0),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InvoiceStats {
    pub count: usize,
    pub total_amount: f64,
    pub paid: usize,
}

impl InvoiceStats {
    pub fn compute(invoices: &[Invoice], appointments: &[Appointment]) -> Self {
        let total_amount = sum_prices(
            invoices
                .iter()
                .map(|inv| invoice_display_total(inv, find_appointment(appointments, inv.appointment_id))),
        );
        Self {
            count: invoices.len(),
            total_amount,
            paid: invoices.iter().filter(|inv| inv.paid).count(),
        }
    }
}

pub fn find_appointment(appointments: &[Appointment], id: i64) -> Option<&Appointment> {
    appointments.iter().find(|a| a.id == id)
}

/// Completed appointments that have no invoice yet, in list order.
pub fn uninvoiced_completed(appointments: &[Appointment], invoices: &[Invoice]) -> Vec<Appointment> {
    let invoiced: HashSet<i64> = invoices.iter().map(|inv| inv.appointment_id).collect();
    appointments
        .iter()
        .filter(|a| a.is_done() && !invoiced.contains(&a.id))
        .cloned()
        .collect()
}

pub fn generate_option_label(appointment: &Appointment, pets: &[Pet]) -> String {
    format!(
        "Appt #{} - {} - {} ({})",
        appointment.id,
        pet_name(pets, appointment.pet_id),
        appointment.vet_name,
        dates::display_day_of(&appointment.datetime)
    )
}

pub fn paid_badge(paid: bool) -> (BadgeVariant, &'static str) {
    if paid { (BadgeVariant::Success, "✓ PAID") } else { (BadgeVariant::Warning, "PENDING") }
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let portfolio = RwSignal::new(OwnerPortfolio::default());
    let loading = RwSignal::new(true);

    if let Some(owner_id) = session.with_untracked(|s| s.owner_id().map(str::to_owned)) {
        leptos::task::spawn_local(async move {
            match futures::try_join!(api::list_invoices(), api::list_appointments(), api::list_pets()) {
                Ok((invoices, appointments, pets)) => {
                    portfolio.set(OwnerPortfolio::scope(&owner_id, pets, appointments, invoices));
                }
                Err(e) => {
                    log::error!("failed to fetch invoices: {e}");
                    toast.update(|t| {
                        t.error("Failed to load invoices");
                    });
                }
            }
            loading.set(false);
        });
    }

    let stats = move || portfolio.with(|p| InvoiceStats::compute(&p.invoices, &p.appointments));
    let on_download = Callback::new(move |()| {
        toast.update(|t| {
            t.info("Download started...");
        });
    });
    let on_pay = Callback::new(move |()| {
        toast.update(|t| {
            t.info("Payment feature coming soon");
        });
    });

    view! {
        <div class="page invoices-page">
            <a class="page__back" href="/dashboard">"← Back to Dashboard"</a>
            <header class="page__header">
                <h1 class="page__title">"Invoices"</h1>
                <p class="page__subtitle">"View and manage your appointment invoices"</p>
            </header>

            <Show when=move || !loading.get() && portfolio.with(|p| !p.invoices.is_empty())>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Invoices"</span>
                        <div class="stat-card__value">{move || stats().count}</div>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Total Amount"</span>
                        <div class="stat-card__value">{move || format_money(stats().total_amount)}</div>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Paid"</span>
                        <div class="stat-card__value">{move || stats().paid}</div>
                    </div>
                </div>
            </Show>

            <Show when=move || !loading.get()>
                <GenerateInvoicePanel portfolio=portfolio/>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="card-list">
                            {(0..3).map(|_| view! { <div class="card"><Skeleton count=3/></div> }).collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <Show
                    when=move || portfolio.with(|p| !p.invoices.is_empty())
                    fallback=|| {
                        view! {
                            <EmptyState
                                icon="🧾"
                                title="No Invoices Yet"
                                description="Complete an appointment to generate your first invoice"
                                action_label="Book Appointment"
                                action_href="/appointments/book"
                            />
                        }
                    }
                >
                    <div class="card-list">
                        <For
                            each=move || portfolio.with(|p| p.invoices.clone())
                            key=|inv| (inv.id, inv.paid)
                            children=move |invoice| {
                                view! {
                                    <InvoiceCard invoice=invoice portfolio=portfolio on_download=on_download on_pay=on_pay/>
                                }
                            }
                        />
                    </div>
                    <div class="action-grid">
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/pets">"🐾 View My Pets"</a>
                        <a class=block_link_class(ButtonVariant::Secondary, ButtonSize::Lg) href="/appointments">
                            "📅 View Appointments"
                        </a>
                    </div>
                </Show>
            </Show>

            <aside class="tip">
                <h3 class="tip__title">"🧾 About Invoices"</h3>
                <ul>
                    <li>"Invoices are generated for completed appointments"</li>
                    <li>"You can download invoices as PDF for your records"</li>
                    <li>"Payment functionality will be available soon"</li>
                </ul>
            </aside>
        </div>
    }
}

#[component]
fn InvoiceCard(
    invoice: Invoice,
    portfolio: RwSignal<OwnerPortfolio>,
    on_download: Callback<()>,
    on_pay: Callback<()>,
) -> impl IntoView {
    let (appointment, pet) = portfolio.with_untracked(|p| {
        let appointment = p.appointment(invoice.appointment_id).cloned();
        let pet = appointment
            .as_ref()
            .map_or_else(|| dates::UNKNOWN.to_owned(), |a| pet_name(&p.pets, a.pet_id));
        (appointment, pet)
    });
    let total = invoice_display_total(&invoice, appointment.as_ref());
    let day = appointment.as_ref().map(|a| dates::display_day_of(&a.datetime));
    let (badge_variant, badge_text) = paid_badge(invoice.paid);
    let paid = invoice.paid;

    let service_lines = appointment
        .as_ref()
        .filter(|a| !a.services.is_empty())
        .map(|a| {
            a.services
                .iter()
                .map(|s| {
                    view! {
                        <div class="invoice-card__line">
                            <span>{s.name.clone()}</span>
                            <span class="invoice-card__price">{format_money(s.price)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        });

    view! {
        <Card class=if paid { "invoice-card invoice-card--paid" } else { "invoice-card" }>
            <div class="invoice-card__head">
                <div>
                    <h3 class="invoice-card__title">{format!("📄 Invoice #{}", invoice.id)}</h3>
                    <p class="invoice-card__meta">
                        {format!("Pet: {pet}")}
                        {day.map(|d| format!(" • {d}"))}
                    </p>
                </div>
                <Badge variant=badge_variant size=BadgeSize::Sm>{badge_text}</Badge>
            </div>
            <div class="divider"></div>
            {match service_lines {
                Some(lines) => view! {
                    <div class="invoice-card__services">
                        <h4>"Services"</h4>
                        {lines}
                    </div>
                }
                .into_any(),
                None => view! { <p class="invoice-card__empty">"No service details available"</p> }.into_any(),
            }}
            <div class="divider"></div>
            <div class="invoice-card__total">
                <span>"Total Amount"</span>
                <span class="invoice-card__amount">{format_money(total)}</span>
            </div>
            {invoice.notes.clone().filter(|n| !n.trim().is_empty()).map(|notes| {
                view! {
                    <div class="invoice-card__notes">
                        <p class="invoice-card__notes-label">"Notes"</p>
                        <p>{notes}</p>
                    </div>
                }
            })}
            <div class="invoice-card__actions">
                <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm on_click=on_download>"⬇ Download PDF"</Button>
                <Show when=move || !paid>
                    <Button size=ButtonSize::Sm on_click=on_pay>"Pay Now"</Button>
                </Show>
            </div>
        </Card>
    }
}

/// Generates an invoice for one of the owner's completed, uninvoiced
/// appointments.
#[component]
fn GenerateInvoicePanel(portfolio: RwSignal<OwnerPortfolio>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let selected = RwSignal::new(String::new());
    let mark_paid = RwSignal::new(false);
    let generating = RwSignal::new(false);

    let candidates = Memo::new(move |_| portfolio.with(|p| uninvoiced_completed(&p.appointments, &p.invoices)));

    // Keep the selection on a valid candidate as the list changes.
    Effect::new(move || {
        let options = candidates.get();
        let current = selected.get_untracked();
        if !options.iter().any(|a| a.id.to_string() == current) {
            selected.set(options.first().map(|a| a.id.to_string()).unwrap_or_default());
        }
    });

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if generating.get() {
            return;
        }
        let Ok(appointment_id) = selected.get().parse::<i64>() else {
            toast.update(|t| {
                t.error("Select an appointment to invoice");
            });
            return;
        };
        let paid = mark_paid.get();
        generating.set(true);
        leptos::task::spawn_local(async move {
            match api::create_invoice(appointment_id, paid).await {
                Ok(invoice) => {
                    log::info!("generated invoice {} for appointment {appointment_id}", invoice.id);
                    portfolio.update(|p| p.invoices.push(invoice));
                    mark_paid.set(false);
                    toast.update(|t| {
                        t.success("Invoice generated!");
                    });
                }
                Err(e) => {
                    toast.update(|t| {
                        t.error(format!("Failed to generate invoice: {e}"));
                    });
                }
            }
            generating.set(false);
        });
    };

    view! {
        <Show when=move || candidates.with(|c| !c.is_empty())>
            <form class="card form generate-invoice" on:submit=on_generate>
                <h2 class="generate-invoice__title">"Generate Invoice"</h2>
                <div class="form__row">
                    <select
                        class="form__input"
                        prop:value=move || selected.get()
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        {move || {
                            let pets = portfolio.with(|p| p.pets.clone());
                            candidates
                                .get()
                                .iter()
                                .map(|a| view! { <option value=a.id.to_string()>{generate_option_label(a, &pets)}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <label class="form__check">
                        <input
                            type="checkbox"
                            prop:checked=move || mark_paid.get()
                            on:change=move |ev| mark_paid.set(event_target_checked(&ev))
                        />
                        "Mark paid"
                    </label>
                </div>
                <Button submit=true disabled=Signal::derive(move || generating.get())>
                    {move || if generating.get() { "Creating..." } else { "Create Invoice" }}
                </Button>
            </form>
        </Show>
    }
}
