use crate::command::{Command, HELP_TEXT};
use crate::error::{Result as ShellErrorResult, ShellError};

use sd_auth::{AuditLog, IdentityRegistry, RegistrationRequest, SessionStore, admin};
use sd_config::Config;
use sd_core::{AuditAction, CorrelationRisk, PortfolioPosition, Role};
use sd_nav::{LOGIN_VIEW, NavPolicy, RouteOutcome};
use sd_store::{PortfolioStore, StrategyCatalog, SystemMonitor, sizing};

use std::fmt::Write as _;
use std::str::FromStr;

/// The running dashboard: configuration, the navigation policy, and every
/// in-memory store, wired together the way the presentation layer uses them.
///
/// Everything is synchronous and single-threaded; each dispatched command
/// runs to completion against current state.
pub struct App {
    config: Config,
    policy: NavPolicy,
    store: SessionStore,
    audit: AuditLog,
    catalog: StrategyCatalog,
    portfolios: PortfolioStore,
    monitor: SystemMonitor,
    current_path: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let registry = if config.auth.seed_demo_users {
            IdentityRegistry::with_demo_users()
        } else {
            IdentityRegistry::new()
        };

        Self {
            config,
            policy: NavPolicy::default(),
            store: SessionStore::new(registry),
            audit: AuditLog::new(),
            catalog: StrategyCatalog::with_demo_strategies(),
            portfolios: PortfolioStore::new(),
            monitor: SystemMonitor::with_demo_state(),
            current_path: LOGIN_VIEW.path.to_string(),
        }
    }

    /// REPL prompt reflecting the session.
    pub fn prompt(&self) -> String {
        match self.store.current() {
            Some(identity) => format!("sd:{}> ", identity.username),
            None => "sd> ".to_string(),
        }
    }

    /// Session role plus username, gated on the role being allowed to reach
    /// `path`. The same policy the router and menu use, no separate checks.
    fn require_view(&self, path: &str) -> ShellErrorResult<(Role, String)> {
        let identity = self.store.current().ok_or(ShellError::NotLoggedIn)?;
        if !self.policy.is_permitted(identity.role, path) {
            return Err(ShellError::ViewDenied {
                path: path.to_string(),
            });
        }
        Ok((identity.role, identity.username.clone()))
    }

    /// Where a fresh session lands, as text.
    fn landing(&mut self, role: Role) -> String {
        match self.policy.post_login_view(role) {
            Some(view) => {
                self.current_path = view.path.to_string();
                format!("Now at {} ({})", view.path, view.label)
            }
            None => "Your role has no views; ask an admin for access".to_string(),
        }
    }

    pub fn dispatch(&mut self, command: Command) -> ShellErrorResult<String> {
        match command {
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Quit => Ok(String::new()),

            Command::Login { username, password } => {
                if self.store.login(&username, &password) {
                    let role = self.store.current_role().ok_or(ShellError::NotLoggedIn)?;
                    let landing = self.landing(role);
                    Ok(format!("Logged in as {username} ({role}). {landing}"))
                } else {
                    Ok("Login failed: check username and password".to_string())
                }
            }

            Command::Logout => {
                self.store.logout();
                self.current_path = LOGIN_VIEW.path.to_string();
                Ok("Logged out".to_string())
            }

            Command::Register {
                username,
                email,
                role,
            } => {
                let mut request = RegistrationRequest::new(&username, &email);
                if let Some(role) = role {
                    // Accepted but never honored.
                    request.requested_role = Role::from_str(&role).ok();
                }
                self.store.register(request);

                let role = self.store.current_role().ok_or(ShellError::NotLoggedIn)?;
                let landing = self.landing(role);
                Ok(format!("Registered {username} as {role}. {landing}"))
            }

            Command::Whoami => match self.store.current() {
                Some(identity) => Ok(format!(
                    "{} <{}> role={} status={} member since {}",
                    identity.username,
                    identity.email,
                    identity.role,
                    identity.status,
                    identity.registered_at.format("%Y-%m-%d")
                )),
                None => Ok("Not logged in".to_string()),
            },

            Command::Menu => {
                let menu = self.policy.menu(self.store.current_role());
                if menu.is_empty() {
                    return Ok("(no menu entries: not logged in)".to_string());
                }
                let mut out = String::new();
                for view in menu {
                    let marker = if view.path == self.current_path { "*" } else { " " };
                    let _ = writeln!(out, "{marker} {:<20} {}", view.path, view.label);
                }
                Ok(out.trim_end().to_string())
            }

            Command::Go { path } => {
                let outcome = self.policy.route(self.store.current_role(), &path);
                match outcome {
                    RouteOutcome::Render(view) => {
                        self.current_path = view.path.to_string();
                        Ok(format!("Rendering {} ({})", view.label, view.path))
                    }
                    RouteOutcome::Redirect(view) => {
                        self.current_path = view.path.to_string();
                        Ok(format!("Redirected to {} ({})", view.label, view.path))
                    }
                    RouteOutcome::RedirectToLogin => {
                        self.current_path = LOGIN_VIEW.path.to_string();
                        Ok("Redirected to login".to_string())
                    }
                    RouteOutcome::NoAccess => {
                        Ok("No access: your role has no permitted views".to_string())
                    }
                }
            }

            Command::Strategies { term } => {
                self.require_view("/dashboard")?;
                let results = self.catalog.search(term.as_deref().unwrap_or(""));
                if results.is_empty() {
                    return Ok("No strategies match".to_string());
                }
                let mut out = String::new();
                let _ = writeln!(
                    out,
                    "{:>4} {:<22} {:<8} {:>12} {:>7} {:>7}  status",
                    "rank", "name", "symbol", "net profit", "score", "win%"
                );
                for s in results {
                    let _ = writeln!(
                        out,
                        "{:>4} {:<22} {:<8} {:>12.2} {:>7.1} {:>7.1}  {}",
                        s.rank, s.name, s.symbol, s.net_profit, s.score, s.win_rate, s.status
                    );
                }
                Ok(out.trim_end().to_string())
            }

            Command::ExportStrategies => {
                self.require_view("/dashboard")?;
                let ranked = self.catalog.ranked();
                Ok(serde_json::to_string_pretty(&ranked)?)
            }

            Command::StrategyDetail { id } => {
                let (_, actor) = self.require_view("/dashboard")?;
                let balance = self.config.catalog.reference_balance;
                let strategy = self.catalog.get(id)?;

                let mut out = String::new();
                let _ = writeln!(
                    out,
                    "#{} {} ({}), rank {}, {}",
                    strategy.id, strategy.name, strategy.symbol, strategy.rank, strategy.status
                );
                let _ = writeln!(
                    out,
                    "net profit {:.2}, max DD {:.2} ({:.1}%), {} trades, PF {:.2}, win {:.1}%",
                    strategy.net_profit,
                    strategy.max_drawdown,
                    strategy.drawdown_pct(balance),
                    strategy.total_trades,
                    strategy.profit_factor,
                    strategy.win_rate
                );
                for check in strategy.criteria(balance) {
                    let flag = if check.passed { "pass" } else { "FAIL" };
                    let _ = writeln!(out, "  [{flag}] {:<14} {}", check.name, check.reason);
                }

                self.audit.record(
                    &actor,
                    AuditAction::StrategyViewed,
                    Some(id.to_string()),
                    None,
                );
                Ok(out.trim_end().to_string())
            }

            Command::Download { id } => {
                let (_, actor) = self.require_view("/dashboard")?;
                let strategy = self.catalog.get(id)?;
                let name = strategy.name.clone();

                self.audit.record(
                    &actor,
                    AuditAction::StrategyDownloaded,
                    Some(id.to_string()),
                    None,
                );
                Ok(format!("Downloaded set file for {name}"))
            }

            Command::PortfolioShow => {
                let (_, owner) = self.require_view("/portfolio")?;
                let portfolio = self.portfolios.portfolio_for(&owner)?;

                let mut out = String::new();
                let _ = writeln!(
                    out,
                    "{} (balance {:.2}, created {})",
                    portfolio.name,
                    portfolio.balance,
                    portfolio.created_at.format("%Y-%m-%d")
                );
                for p in &portfolio.positions {
                    let _ = writeln!(
                        out,
                        "  #{:<3} {:<22} {:<8} {:>5.1}%  lot {:.2}  P/L {:>10.2}  corr {:>5.2} ({})",
                        p.strategy_id,
                        p.name,
                        p.symbol,
                        p.allocation_pct,
                        p.lot_size,
                        p.net_profit,
                        p.correlation,
                        CorrelationRisk::classify(p.correlation)
                    );
                }
                let _ = writeln!(
                    out,
                    "total allocation {:.1}%, current P/L {:.2}{}",
                    portfolio.total_allocation(),
                    portfolio.current_pl(),
                    if portfolio.is_over_allocated() {
                        " [OVER-ALLOCATED]"
                    } else {
                        ""
                    }
                );
                Ok(out.trim_end().to_string())
            }

            Command::PortfolioCreate { name, balance } => {
                let (_, owner) = self.require_view("/portfolio")?;
                self.portfolios.create(&owner, &name, balance);
                self.audit.record(
                    &owner,
                    AuditAction::PortfolioCreated,
                    Some(name.clone()),
                    None,
                );
                Ok(format!("Created portfolio {name} with balance {balance:.2}"))
            }

            Command::PortfolioAdd {
                strategy_id,
                allocation_pct,
                risk_level,
            } => {
                let (_, owner) = self.require_view("/portfolio")?;
                let strategy = self.catalog.get(strategy_id)?;

                // Kelly sizing from the backtest stats: the win/loss ratio
                // falls out of profit factor and win rate.
                let win_rate = strategy.win_rate / 100.0;
                let payoff_ratio = if win_rate > 0.0 {
                    strategy.profit_factor * (1.0 - win_rate) / win_rate
                } else {
                    0.0
                };
                let kelly = sizing::kelly_fraction(win_rate, payoff_ratio, 1.0);

                let balance = self.portfolios.portfolio_for(&owner)?.balance;
                let scaled = balance * allocation_pct / 100.0;
                let lot = sizing::suggested_lot(scaled, kelly, risk_level);

                let position = PortfolioPosition::from_strategy(strategy, allocation_pct, lot);
                let name = strategy.name.clone();
                self.portfolios.add_position(&owner, position)?;

                let portfolio = self.portfolios.portfolio_for(&owner)?;
                let warning = if portfolio.is_over_allocated() {
                    format!(
                        "\nWarning: total allocation now {:.1}%",
                        portfolio.total_allocation()
                    )
                } else {
                    String::new()
                };
                Ok(format!(
                    "Added {name} at {allocation_pct:.1}% (kelly {kelly:.2}, lot {lot:.2}){warning}"
                ))
            }

            Command::PortfolioRemove { strategy_id } => {
                let (_, owner) = self.require_view("/portfolio")?;
                self.portfolios.remove_position(&owner, strategy_id)?;
                Ok(format!("Removed strategy {strategy_id} from portfolio"))
            }

            Command::AdminPending => {
                let pending = admin::pending_users(&self.store)?;
                if pending.is_empty() {
                    return Ok("No pending users".to_string());
                }
                let mut out = String::new();
                for user in pending {
                    let _ = writeln!(
                        out,
                        "{:<12} {:<24} requested {} on {}",
                        user.username,
                        user.email,
                        user.role,
                        user.registered_at.format("%Y-%m-%d")
                    );
                }
                Ok(out.trim_end().to_string())
            }

            Command::AdminApprove { username } => {
                admin::approve_user(&mut self.store, &mut self.audit, &username)?;
                Ok(format!("Approved {username}"))
            }

            Command::AdminDeny { username } => {
                admin::deny_user(&mut self.store, &mut self.audit, &username)?;
                Ok(format!("Denied {username}"))
            }

            Command::AdminRole { username, role } => {
                let role = Role::from_str(&role)?;
                admin::change_role(&mut self.store, &mut self.audit, &username, role)?;
                Ok(format!("Changed {username} to {role}"))
            }

            Command::Audit { action } => {
                self.require_view("/admin/audit")?;
                let entries = match action {
                    Some(action) => self.audit.by_action(AuditAction::from_str(&action)?),
                    None => self.audit.recent(self.config.catalog.audit_recent_limit),
                };
                if entries.is_empty() {
                    return Ok("No audit entries".to_string());
                }
                let mut out = String::new();
                for e in entries {
                    let _ = writeln!(
                        out,
                        "{} {:<10} {:<20} {} {}",
                        e.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        e.actor,
                        e.action,
                        e.target.as_deref().unwrap_or("-"),
                        e.details.as_deref().unwrap_or("")
                    );
                }
                Ok(out.trim_end().to_string())
            }

            Command::Monitor => {
                self.require_view("/admin/monitoring")?;
                let mut out = String::new();

                let _ = writeln!(out, "Task queue:");
                for (status, count) in self.monitor.status_counts() {
                    let _ = writeln!(out, "  {status:<12} {count}");
                }

                let _ = writeln!(out, "Thresholds:");
                for t in self.monitor.thresholds() {
                    let _ = writeln!(out, "  {:<26} {}", t.name, t.value);
                }

                let health = self.monitor.health();
                if health.is_healthy() {
                    let _ = writeln!(out, "Health: ok ({} open tasks)", health.open_tasks);
                } else {
                    let _ = writeln!(out, "Health: {} warnings", health.warnings.len());
                    for w in &health.warnings {
                        let _ = writeln!(out, "  ! {w}");
                    }
                }
                Ok(out.trim_end().to_string())
            }

            Command::Threshold { name, value } => {
                let (_, actor) = self.require_view("/admin/monitoring")?;
                let old = self.monitor.set_threshold(&name, value)?;
                self.audit.record(
                    &actor,
                    AuditAction::ThresholdUpdated,
                    Some(name.clone()),
                    Some(format!("{old} -> {value}")),
                );
                Ok(format!("Threshold {name}: {old} -> {value}"))
            }

            Command::SettingsEmail { email } => {
                self.require_view("/settings")?;
                self.store.update_email(&email)?;
                Ok("Email updated".to_string())
            }

            Command::SettingsPassword { new, confirm } => {
                self.require_view("/settings")?;
                let min = self.config.auth.password_min_length;
                self.store.change_password(&new, &confirm, min)?;
                Ok("Password updated".to_string())
            }

            Command::SettingsApiKey { key } => {
                self.require_view("/settings")?;
                self.store.set_api_key(&key)?;
                Ok("API key updated".to_string())
            }
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }
}
