//! Markdown report renderer adapter.
//!
//! Renders a step-by-step VIKOR report: method description, input data,
//! every intermediate computation, and the final ranking. Formulas are
//! emitted as LaTeX inside `$...$` / `$$...$$` blocks.

use std::fmt::Write;

use crate::domain::analysis::RankedResult;
use crate::domain::problem::DecisionProblem;
use crate::ports::{ReportError, ReportOptions, ReportRenderer};

/// Markdown implementation of ReportRenderer.
///
/// Every number shown is read from the `RankedResult`; inputs are printed
/// as given, computed values with the configured precision.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    /// Creates a new markdown renderer.
    pub fn new() -> Self {
        Self
    }

    fn check_shape(problem: &DecisionProblem, result: &RankedResult) -> Result<(), ReportError> {
        if result.alternative_count() != problem.matrix.alternative_count() {
            return Err(ReportError::mismatched(
                "alternatives",
                problem.matrix.alternative_count(),
                result.alternative_count(),
            ));
        }
        if result.criteria_count() != problem.matrix.criteria_count() {
            return Err(ReportError::mismatched(
                "criteria",
                problem.matrix.criteria_count(),
                result.criteria_count(),
            ));
        }
        if problem.weights.len() != problem.matrix.criteria_count() {
            return Err(ReportError::mismatched(
                "weights",
                problem.matrix.criteria_count(),
                problem.weights.len(),
            ));
        }
        Ok(())
    }

    /// Generates the title and method description.
    fn write_header(
        out: &mut String,
        problem: &DecisionProblem,
        options: &ReportOptions,
    ) -> Result<(), ReportError> {
        match &problem.name {
            Some(name) => writeln!(out, "# VIKOR: {}\n", name)?,
            None => writeln!(out, "# VIKOR\n")?,
        }

        if !options.include_description {
            return Ok(());
        }

        out.push_str(
            "VIKOR (VIseKriterijumska Optimizacija I Kompromisno Resenje) is a multi-criteria \
             decision analysis (MCDA) method. It finds a compromise solution for problems in \
             which several, possibly conflicting or incommensurable, criteria must be \
             considered together.\n\n",
        );
        out.push_str("## Key ideas\n\n");
        out.push_str(
            "1. **Compromise solution**: the chosen alternative is the one closest to the ideal \
             on all criteria, allowing for acceptable deviations.\n\n",
        );
        out.push_str("2. **Ideal and anti-ideal solutions**:\n");
        out.push_str(
            "    - The ideal solution $f^*$ is a hypothetical alternative with the best observed \
             value on every criterion.\n",
        );
        out.push_str("    - The anti-ideal solution $f^-$ takes the worst observed value on every criterion.\n\n");
        out.push_str("3. **Indices**:\n");
        out.push_str(
            "    - $S$ measures group utility (weighted distance from the ideal over all \
             criteria) and $R$ measures individual regret (the largest single weighted \
             distance).\n",
        );
        out.push_str("    - $Q$ is the compromise index, a weighted combination of normalized $S$ and $R$.\n\n");
        out.push_str("4. **Ranking**:\n");
        out.push_str("    - Alternatives are ranked by $Q$; the lowest $Q$ is the best compromise.\n\n");
        out.push_str("5. **Weights**:\n");
        out.push_str("    - Criterion weights express the relative importance of each criterion.\n\n");
        Ok(())
    }

    /// Generates the criteria matrix and weights.
    fn write_inputs(out: &mut String, problem: &DecisionProblem) -> Result<(), ReportError> {
        let matrix = &problem.matrix;

        out.push_str("## Input data\n\n");
        out.push_str("### Criteria matrix\n");
        out.push_str("- $i$ - alternative\n");
        out.push_str("- $j$ - criterion\n\n");

        out.push_str("$$\n");
        let columns = "|r".repeat(matrix.alternative_count());
        writeln!(out, "f_{{ij}} = \\begin{{array}} {{|l{}|}}", columns)?;

        for i in 0..matrix.alternative_count() {
            write!(out, " & \\text{{{}}}", escape_latex(&problem.alternative_label(i)))?;
        }
        out.push_str(" \\\\\n");

        for j in 0..matrix.criteria_count() {
            write!(out, "\\text{{{}}}", escape_latex(&problem.criterion_label(j)))?;
            for score in matrix.column(j) {
                write!(out, " & {:.2}", score)?;
            }
            out.push_str(" \\\\\n");
        }
        out.push_str("\\end{array}\n");
        out.push_str("$$\n\n");

        out.push_str("### Criterion weights\n");
        writeln!(out, "$$ w_j = {} $$\n", plain_list(problem.weights.as_slice()))?;
        Ok(())
    }

    /// Generates the f* / f- section.
    fn write_reference_points(out: &mut String, result: &RankedResult) -> Result<(), ReportError> {
        let points = result.reference_points();
        out.push_str("### Ideal and anti-ideal solutions\n");
        writeln!(out, "- Best value per criterion: $f^* = {}$", plain_list(&points.ideal_f))?;
        writeln!(out, "- Worst value per criterion: $f^- = {}$\n", plain_list(&points.anti_ideal_f))?;
        Ok(())
    }

    /// Symbolic `w_j * (f*_j - f_ij) / (f*_j - f-_j)` term.
    fn symbolic_term(
        problem: &DecisionProblem,
        result: &RankedResult,
        alternative: usize,
        criterion: usize,
    ) -> String {
        let points = result.reference_points();
        let weight = problem.weights.as_slice()[criterion];
        if points.is_degenerate(criterion) {
            return format!("{} \\cdot 0", weight);
        }
        let score = problem.matrix.rows()[alternative][criterion];
        format!(
            "{} \\cdot \\frac{{ {} - {} }}{{ {} - {} }}",
            weight,
            points.ideal_f[criterion],
            score,
            points.ideal_f[criterion],
            points.anti_ideal_f[criterion]
        )
    }

    /// Generates the S and R sections.
    fn write_s_and_r(
        out: &mut String,
        problem: &DecisionProblem,
        result: &RankedResult,
        precision: usize,
    ) -> Result<(), ReportError> {
        let criteria = problem.matrix.criteria_count();

        out.push_str("### Computing S and R\n");
        out.push_str("Formula for $S_i$:\n\n");
        out.push_str("$$ S_i = \\sum_{j=1}^m w_j \\cdot \\frac{f_j^* - f_{ij}}{f_j^* - f^-_j} $$\n\n");

        for (i, distances) in result.weighted_distances().iter().enumerate() {
            let symbolic: Vec<String> = (0..criteria)
                .map(|j| Self::symbolic_term(problem, result, i, j))
                .collect();
            writeln!(
                out,
                "* $S_{{{}}} = {} = {} = {:.p$}$",
                i + 1,
                symbolic.join(" + "),
                fixed_list(distances, precision).join(" + "),
                result.s_values()[i],
                p = precision
            )?;
        }
        out.push('\n');

        out.push_str("Formula for $R_i$:\n\n");
        out.push_str(
            "$$ R_i = \\max_j \\left(w_j \\cdot \\frac{f_j^* - f_{ij}}{f_j^* - f^-_j}\\right) $$\n\n",
        );

        for (i, distances) in result.weighted_distances().iter().enumerate() {
            let symbolic: Vec<String> = (0..criteria)
                .map(|j| Self::symbolic_term(problem, result, i, j))
                .collect();
            writeln!(
                out,
                "* $R_{{{}}} = \\max({}) = \\max({}) = {:.p$}$",
                i + 1,
                symbolic.join(", "),
                fixed_list(distances, precision).join(", "),
                result.r_values()[i],
                p = precision
            )?;
        }
        out.push('\n');
        Ok(())
    }

    /// Generates the S*/S-/R*/R- section.
    fn write_bounds(out: &mut String, result: &RankedResult, precision: usize) -> Result<(), ReportError> {
        let bounds = result.bounds();
        out.push_str("### Extremes of S and R\n");
        writeln!(out, "- Largest S: $S^- = {:.p$}$", bounds.s_minus, p = precision)?;
        writeln!(out, "- Smallest S: $S^* = {:.p$}$", bounds.s_star, p = precision)?;
        writeln!(out, "- Largest R: $R^- = {:.p$}$", bounds.r_minus, p = precision)?;
        writeln!(out, "- Smallest R: $R^* = {:.p$}$\n", bounds.r_star, p = precision)?;
        Ok(())
    }

    /// Generates the Q section.
    fn write_q(out: &mut String, result: &RankedResult, precision: usize) -> Result<(), ReportError> {
        let bounds = result.bounds();
        let degeneracy = result.degeneracy();
        let v = result.compromise();

        out.push_str("### Computing Q\n");
        out.push_str("Formula for $Q_i$:\n\n");
        out.push_str(
            "$$ Q_i = v \\cdot \\frac{S_i - S^*}{S^- - S^*} + (1-v) \\cdot \\frac{R_i - R^*}{R^- - R^*} $$\n\n",
        );
        writeln!(out, "Compromise weight: $v = {}$\n", v)?;

        for i in 0..result.alternative_count() {
            let s_term = if degeneracy.s_range {
                "0".to_string()
            } else {
                format!(
                    "\\frac{{ {s:.p$} - {lo:.p$} }}{{ {hi:.p$} - {lo:.p$} }}",
                    s = result.s_values()[i],
                    lo = bounds.s_star,
                    hi = bounds.s_minus,
                    p = precision
                )
            };
            let r_term = if degeneracy.r_range {
                "0".to_string()
            } else {
                format!(
                    "\\frac{{ {r:.p$} - {lo:.p$} }}{{ {hi:.p$} - {lo:.p$} }}",
                    r = result.r_values()[i],
                    lo = bounds.r_star,
                    hi = bounds.r_minus,
                    p = precision
                )
            };
            writeln!(
                out,
                "* $Q_{{{}}} = {} \\cdot {} + (1-{}) \\cdot {} = {:.p$}$",
                i + 1,
                v,
                s_term,
                v,
                r_term,
                result.q_values()[i],
                p = precision
            )?;
        }
        out.push('\n');
        Ok(())
    }

    /// Generates notes for zero-substituted denominators.
    fn write_degeneracy_notes(
        out: &mut String,
        problem: &DecisionProblem,
        result: &RankedResult,
    ) -> Result<(), ReportError> {
        let degeneracy = result.degeneracy();
        if degeneracy.is_none() {
            return Ok(());
        }

        for &j in &degeneracy.criteria {
            writeln!(
                out,
                "> **Note:** {} does not distinguish the alternatives ($f^* = f^-$); its distance is taken as 0.",
                problem.criterion_label(j)
            )?;
        }
        if degeneracy.s_range {
            out.push_str("> **Note:** every alternative has the same $S$; the $S$ term of $Q$ is taken as 0.\n");
        }
        if degeneracy.r_range {
            out.push_str("> **Note:** every alternative has the same $R$; the $R$ term of $Q$ is taken as 0.\n");
        }
        out.push('\n');
        Ok(())
    }

    /// Generates the final ranking.
    fn write_results(
        out: &mut String,
        problem: &DecisionProblem,
        result: &RankedResult,
        precision: usize,
    ) -> Result<(), ReportError> {
        out.push_str("## Results\n\n");
        out.push_str(
            "Alternatives are ordered by ascending $Q_i$. The lowest $Q$ is the best compromise solution.\n\n",
        );
        out.push_str("### Ranking\n");
        for (rank, entry) in result.ranked_alternatives().iter().enumerate() {
            writeln!(
                out,
                "{}. {} ($Q_{{{}}} = {:.p$}$)",
                rank + 1,
                problem.alternative_label(entry.alternative - 1),
                entry.alternative,
                entry.q,
                p = precision
            )?;
        }
        writeln!(
            out,
            "\n**Best alternative:** {}",
            problem.alternative_label(result.best_alternative() - 1)
        )?;
        Ok(())
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(
        &self,
        problem: &DecisionProblem,
        result: &RankedResult,
        options: &ReportOptions,
    ) -> Result<String, ReportError> {
        Self::check_shape(problem, result)?;
        let precision = options.precision;

        let mut out = String::new();
        Self::write_header(&mut out, problem, options)?;
        Self::write_inputs(&mut out, problem)?;

        out.push_str("## Computation\n\n");
        Self::write_reference_points(&mut out, result)?;
        Self::write_s_and_r(&mut out, problem, result, precision)?;
        Self::write_bounds(&mut out, result, precision)?;
        Self::write_q(&mut out, result, precision)?;
        Self::write_degeneracy_notes(&mut out, problem, result)?;

        Self::write_results(&mut out, problem, result, precision)?;
        Ok(out)
    }
}

/// `[a, b, c]` using shortest round-trip formatting.
fn plain_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn fixed_list(values: &[f64], precision: usize) -> Vec<String> {
    values.iter().map(|v| format!("{:.p$}", v, p = precision)).collect()
}

/// Escapes characters with special meaning inside `\text{}`.
fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '{' | '}' | '_' | '&' | '%' | '$' | '#' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
