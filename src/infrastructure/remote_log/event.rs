//! Remote log event model and its validation rules.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::sink::RemoteLogError;

/// Side of the application that produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Component that produced the event.
///
/// Each package is only valid for the stacks listed in
/// [`Package::allowed_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    // backend only
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    // frontend only
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    // shared
    Auth,
    Config,
    Middleware,
    Utils,
}

impl Package {
    pub fn allowed_in(self, stack: Stack) -> bool {
        use Package::*;
        match self {
            Auth | Config | Middleware | Utils => true,
            Cache | Controller | CronJob | Db | Domain | Handler | Repository | Route
            | Service => stack == Stack::Backend,
            Api | Component | Hook | Page | State | Style => stack == Stack::Frontend,
        }
    }

    pub fn as_str(self) -> &'static str {
        use Package::*;
        match self {
            Cache => "cache",
            Controller => "controller",
            CronJob => "cron_job",
            Db => "db",
            Domain => "domain",
            Handler => "handler",
            Repository => "repository",
            Route => "route",
            Service => "service",
            Api => "api",
            Component => "component",
            Hook => "hook",
            Page => "page",
            State => "state",
            Style => "style",
            Auth => "auth",
            Config => "config",
            Middleware => "middleware",
            Utils => "utils",
        }
    }
}

impl Stack {
    pub fn as_str(self) -> &'static str {
        match self {
            Stack::Backend => "backend",
            Stack::Frontend => "frontend",
        }
    }
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = RemoteLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backend" => Ok(Stack::Backend),
            "frontend" => Ok(Stack::Frontend),
            other => Err(RemoteLogError::InvalidStack(other.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = RemoteLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(RemoteLogError::InvalidLevel(other.to_string())),
        }
    }
}

impl FromStr for Package {
    type Err = RemoteLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Package::*;
        let package = match s.to_ascii_lowercase().as_str() {
            "cache" => Cache,
            "controller" => Controller,
            "cron_job" => CronJob,
            "db" => Db,
            "domain" => Domain,
            "handler" => Handler,
            "repository" => Repository,
            "route" => Route,
            "service" => Service,
            "api" => Api,
            "component" => Component,
            "hook" => Hook,
            "page" => Page,
            "state" => State,
            "style" => Style,
            "auth" => Auth,
            "config" => Config,
            "middleware" => Middleware,
            "utils" => Utils,
            other => return Err(RemoteLogError::UnknownPackage(other.to_string())),
        };
        Ok(package)
    }
}

/// A validated log event, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEvent {
    /// Builds an event, rejecting packages that do not belong to `stack`.
    pub fn new(
        stack: Stack,
        level: Level,
        package: Package,
        message: impl Into<String>,
    ) -> Result<Self, RemoteLogError> {
        if !package.allowed_in(stack) {
            return Err(RemoteLogError::PackageNotAllowed { package, stack });
        }

        Ok(Self {
            stack,
            level,
            package,
            message: message.into(),
        })
    }

    /// Builds an event from loosely typed input. Names are case-insensitive.
    pub fn parse(
        stack: &str,
        level: &str,
        package: &str,
        message: impl Into<String>,
    ) -> Result<Self, RemoteLogError> {
        Self::new(stack.parse()?, level.parse()?, package.parse()?, message)
    }
}
