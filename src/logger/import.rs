// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Report formats and flags accepted by the `importData` message.

use std::fmt;

/// Report format understood by the server's report importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportType {
    Junit,
    Surefire,
    Nunit,
    Mstest,
    Vstest,
    Trx,
    Gtest,
    Jslint,
    FxCop,
    Pmd,
    PmdCpd,
    Checkstyle,
    FindBugs,
    ReSharperInspectCode,
    DotNetDupFinder,
    IntellijInspections,
    Jacoco,
    DotNetCoverage,
}

impl ImportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportType::Junit => "junit",
            ImportType::Surefire => "surefire",
            ImportType::Nunit => "nunit",
            ImportType::Mstest => "mstest",
            ImportType::Vstest => "vstest",
            ImportType::Trx => "trx",
            ImportType::Gtest => "gtest",
            ImportType::Jslint => "jslint",
            ImportType::FxCop => "FxCop",
            ImportType::Pmd => "pmd",
            ImportType::PmdCpd => "pmdCpd",
            ImportType::Checkstyle => "checkstyle",
            ImportType::FindBugs => "findBugs",
            ImportType::ReSharperInspectCode => "ReSharperInspectCode",
            ImportType::DotNetDupFinder => "DotNetDupFinder",
            ImportType::IntellijInspections => "intellij-inspections",
            ImportType::Jacoco => "jacoco",
            ImportType::DotNetCoverage => "dotNetCoverage",
        }
    }
}

impl fmt::Display for ImportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the server does when an import finds no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoDataPublishedAction {
    Info,
    Nothing,
    Warning,
    Error,
}

impl NoDataPublishedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoDataPublishedAction::Info => "info",
            NoDataPublishedAction::Nothing => "nothing",
            NoDataPublishedAction::Warning => "warning",
            NoDataPublishedAction::Error => "error",
        }
    }
}

/// Coverage tool that produced a `dotNetCoverage` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageTool {
    Dotcover,
    Partcover,
    Ncover,
    Ncover3,
}

impl CoverageTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageTool::Dotcover => "dotcover",
            CoverageTool::Partcover => "partcover",
            CoverageTool::Ncover => "ncover",
            CoverageTool::Ncover3 => "ncover3",
        }
    }
}

/// Optional flags of `importData`. Unset flags are left out of the message.
///
/// # Example
/// ```
/// use teamcity_messages::logger::{ImportDataOptions, NoDataPublishedAction};
///
/// let options = ImportDataOptions {
///     parse_out_of_date: Some(true),
///     when_no_data_published: Some(NoDataPublishedAction::Warning),
///     ..ImportDataOptions::default()
/// };
/// assert_eq!(options.parameters().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDataOptions {
    /// Also import files older than the build start.
    pub parse_out_of_date: Option<bool>,
    pub when_no_data_published: Option<NoDataPublishedAction>,
    /// Log every processed file.
    pub verbose: Option<bool>,
    /// Only meaningful with [`ImportType::DotNetCoverage`].
    pub tool: Option<CoverageTool>,
    /// Only meaningful with [`ImportType::FindBugs`].
    pub find_bugs_home: Option<String>,
    /// Inspection error count that fails the build.
    pub error_limit: Option<u32>,
    /// Inspection warning count that fails the build.
    pub warning_limit: Option<u32>,
}

impl ImportDataOptions {
    /// Flags that are set, as `(key, value)` pairs in emission order.
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        let mut parameters = Vec::new();
        if let Some(tool) = self.tool {
            parameters.push(("tool", tool.as_str().to_string()));
        }
        if let Some(home) = &self.find_bugs_home {
            parameters.push(("findBugsHome", home.clone()));
        }
        if let Some(parse_out_of_date) = self.parse_out_of_date {
            parameters.push(("parseOutOfDate", parse_out_of_date.to_string()));
        }
        if let Some(action) = self.when_no_data_published {
            parameters.push(("whenNoDataPublished", action.as_str().to_string()));
        }
        if let Some(verbose) = self.verbose {
            parameters.push(("verbose", verbose.to_string()));
        }
        if let Some(limit) = self.error_limit {
            parameters.push(("errorLimit", limit.to_string()));
        }
        if let Some(limit) = self.warning_limit {
            parameters.push(("warningLimit", limit.to_string()));
        }
        parameters
    }
}
