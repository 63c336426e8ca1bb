use crate::error::{Result as ShellErrorResult, ShellError};

/// One parsed REPL command. The shell is the stand-in presentation layer:
/// every variant maps onto an operation of the underlying stores.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Login { username: String, password: String },
    Logout,
    Register { username: String, email: String, role: Option<String> },
    Whoami,
    Menu,
    Go { path: String },
    Strategies { term: Option<String> },
    ExportStrategies,
    StrategyDetail { id: u32 },
    Download { id: u32 },
    PortfolioShow,
    PortfolioCreate { name: String, balance: f64 },
    PortfolioAdd { strategy_id: u32, allocation_pct: f64, risk_level: u8 },
    PortfolioRemove { strategy_id: u32 },
    AdminPending,
    AdminApprove { username: String },
    AdminDeny { username: String },
    AdminRole { username: String, role: String },
    Audit { action: Option<String> },
    Monitor,
    Threshold { name: String, value: i64 },
    SettingsEmail { email: String },
    SettingsPassword { new: String, confirm: String },
    SettingsApiKey { key: String },
}

const DEFAULT_RISK_LEVEL: u8 = 5;

fn parse_u32(token: &str, what: &str) -> ShellErrorResult<u32> {
    token
        .parse()
        .map_err(|_| ShellError::usage(format!("{what} must be a number, got '{token}'")))
}

fn parse_f64(token: &str, what: &str) -> ShellErrorResult<f64> {
    token
        .parse()
        .map_err(|_| ShellError::usage(format!("{what} must be a number, got '{token}'")))
}

impl Command {
    pub fn parse(line: &str) -> ShellErrorResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["help"] => Ok(Self::Help),
            ["quit"] | ["exit"] => Ok(Self::Quit),

            ["login", username, password] => Ok(Self::Login {
                username: username.to_string(),
                password: password.to_string(),
            }),
            ["login", ..] => Err(ShellError::usage("usage: login <username> <password>")),
            ["logout"] => Ok(Self::Logout),

            ["register", username, email] => Ok(Self::Register {
                username: username.to_string(),
                email: email.to_string(),
                role: None,
            }),
            ["register", username, email, role] => Ok(Self::Register {
                username: username.to_string(),
                email: email.to_string(),
                role: Some(role.to_string()),
            }),
            ["register", ..] => Err(ShellError::usage(
                "usage: register <username> <email> [requested-role]",
            )),

            ["whoami"] => Ok(Self::Whoami),
            ["menu"] => Ok(Self::Menu),
            ["go", path] => Ok(Self::Go {
                path: path.to_string(),
            }),
            ["go", ..] => Err(ShellError::usage("usage: go <path>")),

            ["strategies"] => Ok(Self::Strategies { term: None }),
            ["strategies", term] => Ok(Self::Strategies {
                term: Some(term.to_string()),
            }),
            ["export", "strategies"] => Ok(Self::ExportStrategies),
            ["export", ..] => Err(ShellError::usage("usage: export strategies")),
            ["strategy", id] => Ok(Self::StrategyDetail {
                id: parse_u32(id, "strategy id")?,
            }),
            ["download", id] => Ok(Self::Download {
                id: parse_u32(id, "strategy id")?,
            }),

            ["portfolio"] | ["portfolio", "show"] => Ok(Self::PortfolioShow),
            ["portfolio", "create", name, balance] => Ok(Self::PortfolioCreate {
                name: name.to_string(),
                balance: parse_f64(balance, "balance")?,
            }),
            ["portfolio", "add", id, allocation] => Ok(Self::PortfolioAdd {
                strategy_id: parse_u32(id, "strategy id")?,
                allocation_pct: parse_f64(allocation, "allocation")?,
                risk_level: DEFAULT_RISK_LEVEL,
            }),
            ["portfolio", "add", id, allocation, risk] => Ok(Self::PortfolioAdd {
                strategy_id: parse_u32(id, "strategy id")?,
                allocation_pct: parse_f64(allocation, "allocation")?,
                risk_level: parse_u32(risk, "risk level")?.min(10) as u8,
            }),
            ["portfolio", "remove", id] => Ok(Self::PortfolioRemove {
                strategy_id: parse_u32(id, "strategy id")?,
            }),
            ["portfolio", ..] => Err(ShellError::usage(
                "usage: portfolio [show | create <name> <balance> | add <id> <alloc%> [risk 1-10] | remove <id>]",
            )),

            ["admin", "pending"] => Ok(Self::AdminPending),
            ["admin", "approve", username] => Ok(Self::AdminApprove {
                username: username.to_string(),
            }),
            ["admin", "deny", username] => Ok(Self::AdminDeny {
                username: username.to_string(),
            }),
            ["admin", "role", username, role] => Ok(Self::AdminRole {
                username: username.to_string(),
                role: role.to_string(),
            }),
            ["admin", ..] => Err(ShellError::usage(
                "usage: admin [pending | approve <user> | deny <user> | role <user> <role>]",
            )),

            ["audit"] => Ok(Self::Audit { action: None }),
            ["audit", action] => Ok(Self::Audit {
                action: Some(action.to_string()),
            }),

            ["monitor"] => Ok(Self::Monitor),
            ["threshold", name, value] => Ok(Self::Threshold {
                name: name.to_string(),
                value: value
                    .parse()
                    .map_err(|_| ShellError::usage(format!("value must be a number, got '{value}'")))?,
            }),
            ["threshold", ..] => Err(ShellError::usage("usage: threshold <name> <value>")),

            ["settings", "email", email] => Ok(Self::SettingsEmail {
                email: email.to_string(),
            }),
            ["settings", "password", new, confirm] => Ok(Self::SettingsPassword {
                new: new.to_string(),
                confirm: confirm.to_string(),
            }),
            ["settings", "apikey", key] => Ok(Self::SettingsApiKey {
                key: key.to_string(),
            }),
            ["settings", ..] => Err(ShellError::usage(
                "usage: settings [email <addr> | password <new> <confirm> | apikey <key>]",
            )),

            [first, ..] => Err(ShellError::usage(format!(
                "Unknown command '{first}', try 'help'"
            ))),
            [] => Err(ShellError::usage("Empty command")),
        }
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  login <username> <password>       Sign in (demo password: 'password')
  logout                            Sign out
  register <user> <email> [role]    Create an account (role request is ignored)
  whoami                            Show the current identity
  menu                              Show the navigation menu for your role
  go <path>                         Navigate to a view, e.g. go /dashboard
  strategies [term]                 Ranked strategies, optionally filtered
  export strategies                 Ranked strategies as JSON
  strategy <id>                     Strategy detail with acceptance criteria
  download <id>                     Download a strategy's set file
  portfolio ...                     show | create <name> <balance> |
                                    add <id> <alloc%> [risk] | remove <id>
  admin ...                         pending | approve <u> | deny <u> | role <u> <r>
  audit [action]                    Audit log, optionally filtered by action
  monitor                           Queue status, thresholds and health
  threshold <name> <value>          Tune a monitoring threshold
  settings ...                      email <addr> | password <new> <confirm> |
                                    apikey <key>
  help, quit";
