//! Reporting utilities: formatted parameter tables and correlation matrices.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! All `format_*` functions return `String`; the `display_*` wrappers print
//! to stdout. Plain output is tab-separated for terminal reading; the LaTeX
//! variant emits a ready-to-paste `tabular` environment.
use crate::linear::core::summary::FitSummary;
use ndarray::Array2;

/// Numeric rendering for reported values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Fixed-point notation, e.g. `6.100`.
    Fixed,
    /// Scientific notation, e.g. `6.100e0`.
    Exponential,
}

/// Output table style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Tab-separated plain text.
    Plain,
    /// LaTeX `tabular` markup.
    Latex,
}

/// Presentation options for fit reports.
///
/// `par_names` defaults to `Param1`, `Param2`, … when absent;
/// `scale_factor` multiplies every reported value and uncertainty, useful
/// for unit conversions at print time.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Parameter names, one per fitted coefficient.
    pub par_names: Option<Vec<String>>,
    /// Decimal digits printed per value.
    pub precision: usize,
    /// Multiplier applied to values and uncertainties at print time.
    pub scale_factor: f64,
    /// Fixed-point or scientific rendering.
    pub number_format: NumberFormat,
    /// Plain text or LaTeX tables.
    pub table_format: TableFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            par_names: None,
            precision: 3,
            scale_factor: 1.0,
            number_format: NumberFormat::Fixed,
            table_format: TableFormat::Plain,
        }
    }
}

impl ReportOptions {
    fn name(&self, index: usize, fallback_prefix: &str) -> String {
        match &self.par_names {
            Some(names) if index < names.len() => names[index].clone(),
            _ => format!("{fallback_prefix}{}", index + 1),
        }
    }

    fn number(&self, value: f64) -> String {
        match self.number_format {
            NumberFormat::Fixed => format!("{:.*}", self.precision, value),
            NumberFormat::Exponential => format!("{:.*e}", self.precision, value),
        }
    }

    fn pm(&self) -> &'static str {
        match self.table_format {
            TableFormat::Plain => "+/-",
            TableFormat::Latex => "\\pm",
        }
    }
}

/// Format the per-parameter result table plus the goodness-of-fit footer.
///
/// Each parameter line quotes the estimate with both the
/// chi-square-normalized and the formal uncertainty. The footer reports the
/// reduced chi-square (or `undefined` for exactly-determined systems) and
/// the observed-minus-computed RMS.
pub fn format_results(summary: &FitSummary, options: &ReportOptions) -> String {
    let mut out = String::new();
    let scale = options.scale_factor;
    for i in 0..summary.params.len() {
        let normalized = match &summary.normalized_uncertainty {
            Some(uncertainty) => options.number(uncertainty[i] * scale),
            None => "undefined".to_string(),
        };
        out.push_str(&format!(
            "{}\t = {} {} {} (normalised for chi2=1)  +/- {} (formal uncertainty)\n",
            options.name(i, "Param"),
            options.number(summary.params[i] * scale),
            options.pm(),
            normalized,
            options.number(summary.formal_uncertainty[i] * scale),
        ));
    }
    let reduced = match summary.reduced_chi_square() {
        Some(value) => options.number(value),
        None => "undefined".to_string(),
    };
    out.push_str(&format!(
        "reduced chi2 = {reduced}\tO-C RMS        {}\n",
        options.number(summary.residual_rms() * scale),
    ));
    out
}

/// Format the parameter correlation matrix of a fit.
pub fn format_correlations(summary: &FitSummary, options: &ReportOptions) -> String {
    format_square_matrix(&summary.correlation, options)
}

/// Format a square matrix as a lower-triangular table.
///
/// Plain output prints a tab-separated triangle under a header row; LaTeX
/// output emits a `tabular` environment. Entries above the diagonal are
/// omitted, matching the symmetric matrices this is used for.
pub fn format_square_matrix(matrix: &Array2<f64>, options: &ReportOptions) -> String {
    let n = matrix.nrows();
    let mut out = String::new();
    out.push_str(&format!("{} Correlation Matrix {}\n", "*".repeat(10), "*".repeat(10)));
    match options.table_format {
        TableFormat::Plain => {
            out.push_str("\t\t");
            for i in 0..n {
                out.push_str(&format!("{}\t", options.name(i, "P")));
            }
            out.push('\n');
            for i in 0..n {
                out.push_str(&format!("{} \t\t", options.name(i, "P")));
                for j in 0..=i {
                    out.push_str(&format!("{:+1.2} \t", matrix[[i, j]]));
                }
                out.push('\n');
            }
        }
        TableFormat::Latex => {
            out.push_str(&format!(
                "\\begin{{tabular}}{{l |{}}}\n\\hline\\hline\n",
                " r".repeat(n)
            ));
            out.push_str(" ");
            for i in 0..n {
                out.push_str(&format!("& {} ", options.name(i, "P")));
            }
            out.push_str("\\\\ \\hline\n");
            for i in 0..n {
                out.push_str(&options.name(i, "P"));
                for j in 0..n {
                    if j <= i {
                        out.push_str(&format!(" & ${:+1.2}$", matrix[[i, j]]));
                    } else {
                        out.push_str(" &");
                    }
                }
                out.push_str(" \\\\\n");
            }
            out.push_str("\\hline\n\\end{tabular}\n");
        }
    }
    out
}

/// Print the per-parameter result table to stdout.
pub fn display_results(summary: &FitSummary, options: &ReportOptions) {
    print!("{}", format_results(summary, options));
}

/// Print the parameter correlation matrix to stdout.
pub fn display_correlations(summary: &FitSummary, options: &ReportOptions) {
    print!("{}", format_correlations(summary, options));
}

/// Print a square matrix to stdout.
pub fn display_square_matrix(matrix: &Array2<f64>, options: &ReportOptions) {
    print!("{}", format_square_matrix(matrix, options));
}
