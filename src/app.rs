use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{
        BrowserSpawner,
        components::{
            EmailFetcher, Lifecycle, Notify, RenderLogger, StockTicker, TickerToggle,
            toggle::TickerFactory,
        },
    },
    domain::{
        logging::{LogComponent, LogEntry, LogLevel, Logger, get_logger},
        market_data::parse_entry_index,
        render_log::parse_count,
        users::UserId,
    },
    infrastructure::{AppConfig, ConsoleLogger},
    log_warn,
};

const MAX_LOG_LINES: usize = 100;

// 🔗 Глобальные сигналы для логов (bridge к domain::logging)
thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
    static IS_LOG_PAUSED: RwSignal<bool> = create_rw_signal(false);
}

/// 🌉 Bridge logger: browser console plus the debug console panel
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            console: ConsoleLogger::new(min_level),
        }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if !self.console.accepts(entry.level) {
            return;
        }
        let formatted = entry.format_line();
        self.console.log(entry);

        GLOBAL_LOGS.with(|logs| {
            IS_LOG_PAUSED.with(|paused| {
                if !paused.get_untracked() {
                    logs.update(|log_vec| {
                        log_vec.push(formatted);
                        while log_vec.len() > MAX_LOG_LINES {
                            log_vec.remove(0);
                        }
                    });
                }
            });
        });
    }
}

fn notifier(trigger: Trigger) -> Notify {
    Rc::new(move || trigger.notify())
}

/// 🦀 Root component: the four lifecycle demos plus the log console
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <style>
            {r#"
            .lifecycle-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .panel {
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                padding: 16px 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .panel input[type=number] {
                width: 6em;
                margin-left: 8px;
            }

            .render-log, .debug-log {
                font-family: 'SF Mono', Monaco, monospace;
                font-size: 12px;
                max-height: 200px;
                overflow-y: auto;
            }

            .debug-btn {
                margin-left: 8px;
                background: #4a5d73;
                color: white;
                border: none;
                border-radius: 5px;
                padding: 4px 10px;
                cursor: pointer;
            }
            "#}
        </style>
        <div class="lifecycle-app">
            <h1>"Effect lifecycle demo"</h1>
            <CounterPanel/>
            <EmailPanel/>
            <TickerToggleContainer/>
            <DebugConsole/>
        </div>
    }
}

/// 🔢 Counter observed by every-render, mount-only and on-change effects
#[component]
pub fn CounterPanel() -> impl IntoView {
    let trigger = create_trigger();
    let logger = Rc::new(RefCell::new(RenderLogger::default()));
    logger.borrow_mut().mount();

    on_cleanup({
        let logger = logger.clone();
        move || logger.borrow_mut().unmount()
    });

    let on_input = {
        let logger = logger.clone();
        move |ev: web_sys::Event| match parse_count(&event_target_value(&ev)) {
            Ok(count) => {
                let changed = logger.borrow_mut().set_count(count);
                if changed {
                    trigger.notify();
                }
            }
            Err(e) => {
                log_warn!(LogComponent::Presentation("CounterPanel"), "{e}");
            }
        }
    };

    let count = {
        let logger = logger.clone();
        move || {
            trigger.track();
            logger.borrow().count().to_string()
        }
    };

    let history = move || {
        trigger.track();
        logger
            .borrow()
            .history()
            .into_iter()
            .rev()
            .map(|event| view! { <li>{event.to_string()}</li> })
            .collect_view()
    };

    view! {
        <section class="panel">
            <h2>"Render-cycle logger"</h2>
            <label>
                "Count"
                <input type="number" prop:value=count on:input=on_input/>
            </label>
            <ul class="render-log">{history}</ul>
        </section>
    }
}

/// 📧 Email of one user, refetched whenever the id changes
#[component]
pub fn EmailPanel() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let trigger = create_trigger();
    let fetcher = Rc::new(RefCell::new(EmailFetcher::new(
        Rc::new(config.users_client()),
        Rc::new(BrowserSpawner),
        config.default_user_id,
        notifier(trigger),
    )));
    fetcher.borrow_mut().mount();

    on_cleanup({
        let fetcher = fetcher.clone();
        move || fetcher.borrow_mut().unmount()
    });

    let on_input = {
        let fetcher = fetcher.clone();
        move |ev: web_sys::Event| match UserId::parse(&event_target_value(&ev)) {
            Ok(user_id) => {
                let changed = fetcher.borrow_mut().set_user_id(user_id);
                if changed {
                    trigger.notify();
                }
            }
            Err(e) => {
                log_warn!(LogComponent::Presentation("EmailPanel"), "{e}");
            }
        }
    };

    let user_id = {
        let fetcher = fetcher.clone();
        move || {
            trigger.track();
            fetcher.borrow().user_id().to_string()
        }
    };

    let email = move || {
        trigger.track();
        fetcher
            .borrow()
            .email()
            .map(|email| email.value().to_string())
            .unwrap_or_else(|| "Loading...".to_string())
    };

    view! {
        <section class="panel">
            <h2>"User email"</h2>
            <label>
                "User id"
                <input type="number" min="1" prop:value=user_id on:input=on_input/>
            </label>
            <p>"Email: " {email}</p>
        </section>
    }
}

/// ☑️ Checkbox container mounting and unmounting the stock ticker
#[component]
pub fn TickerToggleContainer() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let visibility = create_trigger();
    let quote = create_trigger();

    let factory: TickerFactory = Box::new(move || {
        StockTicker::new(
            Rc::new(config.quotes_client()),
            Rc::new(BrowserSpawner),
            0,
            notifier(quote),
        )
    });
    let toggle = Rc::new(RefCell::new(TickerToggle::new(true, factory)));
    toggle.borrow_mut().mount();

    on_cleanup({
        let toggle = toggle.clone();
        move || toggle.borrow_mut().unmount()
    });

    let on_change = {
        let toggle = toggle.clone();
        move |ev: web_sys::Event| {
            let changed = toggle.borrow_mut().set_visible(event_target_checked(&ev));
            if changed {
                visibility.notify();
            }
        }
    };

    let checked = {
        let toggle = toggle.clone();
        move || {
            visibility.track();
            toggle.borrow().is_visible()
        }
    };

    let ticker = move || {
        visibility.track();
        toggle
            .borrow()
            .ticker()
            .map(|ticker| view! { <TickerView ticker=ticker quote=quote/> })
    };

    view! {
        <section class="panel">
            <h2>"Stock ticker"</h2>
            <label>
                <input type="checkbox" prop:checked=checked on:change=on_change/>
                " Show ticker"
            </label>
            {ticker}
        </section>
    }
}

/// 📈 View over a ticker owned by the toggle container
#[component]
fn TickerView(ticker: Rc<RefCell<StockTicker>>, quote: Trigger) -> impl IntoView {
    let on_input = {
        let ticker = ticker.clone();
        move |ev: web_sys::Event| match parse_entry_index(&event_target_value(&ev)) {
            Ok(index) => {
                let changed = ticker.borrow_mut().set_index(index);
                if changed {
                    quote.notify();
                }
            }
            Err(e) => {
                log_warn!(LogComponent::Presentation("TickerView"), "{e}");
            }
        }
    };

    let index = {
        let ticker = ticker.clone();
        move || {
            quote.track();
            ticker.borrow().index().to_string()
        }
    };

    let price = move || {
        quote.track();
        ticker
            .borrow()
            .price()
            .map(|price| price.value().to_string())
            .unwrap_or_else(|| "Loading...".to_string())
    };

    view! {
        <div>
            <label>
                "Entry"
                <input type="number" min="0" prop:value=index on:input=on_input/>
            </label>
            <p>"Close: " {price}</p>
        </div>
    }
}

/// 🎯 Отладочная консоль с bridge к domain::logging
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);
    let is_paused = IS_LOG_PAUSED.with(|paused| *paused);

    view! {
        <section class="panel debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <button
                    on:click=move |_| {
                        is_paused.update(|p| *p = !*p);
                        if is_paused.get_untracked() {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🛑 Logging paused",
                            );
                        } else {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "▶️ Logging resumed",
                            );
                        }
                    }
                    class="debug-btn"
                >
                    {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button
                    on:click=move |_| {
                        logs.set(Vec::new());
                        get_logger().info(
                            LogComponent::Presentation("DebugConsole"),
                            "🗑️ Log history cleared",
                        );
                    }
                    class="debug-btn"
                >
                    "🗑️ Clear"
                </button>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get().into_iter().enumerate()
                    key=|(i, line)| (*i, line.clone())
                    children=move |(_, line)| {
                        view! { <div class="log-line">{line}</div> }
                    }
                />
            </div>
        </section>
    }
}
