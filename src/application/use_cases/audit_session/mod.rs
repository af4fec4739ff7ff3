use crate::application::dto::AuditOptions;
use crate::page_audit::domain::{Component, Document, PageSnapshot, Report, ALIGNMENT_TEST};
use crate::page_audit::policies::GenericLabelPolicy;
use crate::page_audit::services::{
    AlignmentChecker, ComponentExtractor, ExtractionOutcome, InputLocation, LabelResolver,
    TabOrderChecker,
};
use crate::ports::outbound::{BridgeRequest, PageSource, ProgressReporter, ResultStore, SpellChecker};
use crate::shared::error::AuditError;
use crate::shared::Result;
use chrono::Utc;

/// AuditSession - orchestrates one audit run and owns the current report
///
/// The session is the single reader/writer of the "current report" slot:
/// a run replaces it, and so does an explicit load of the stored run.
/// Exports are always taken from this slot.
///
/// # Type Parameters
/// * `PS` - PageSource implementation
/// * `SC` - SpellChecker implementation
/// * `RS` - ResultStore implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditSession<PS, SC, RS, PR> {
    page_source: PS,
    spell_checker: SC,
    store: RS,
    progress_reporter: PR,
    options: AuditOptions,
    current: Option<Report>,
}

impl<PS, SC, RS, PR> AuditSession<PS, SC, RS, PR>
where
    PS: PageSource,
    SC: SpellChecker,
    RS: ResultStore,
    PR: ProgressReporter,
{
    /// Creates a new AuditSession with injected dependencies
    pub fn new(
        page_source: PS,
        spell_checker: SC,
        store: RS,
        progress_reporter: PR,
        options: AuditOptions,
    ) -> Self {
        Self {
            page_source,
            spell_checker,
            store,
            progress_reporter,
            options,
            current: None,
        }
    }

    pub fn options(&self) -> &AuditOptions {
        &self.options
    }

    /// The report exports are taken from, if any
    pub fn current_report(&self) -> Option<&Report> {
        self.current.as_ref()
    }

    /// Runs every check over the captured page
    ///
    /// # Errors
    /// Returns an error if the page cannot be captured or holds no visible
    /// component. Spelling-service and store failures never abort a run.
    pub async fn run(&mut self) -> Result<&Report> {
        // Step 1: Capture the page and build the node arena
        let snapshot = self.capture()?;
        let doc = Document::from_snapshot(&snapshot.document);

        // Step 2: Extract components (alignment is computed here)
        let ExtractionOutcome {
            mut components,
            inputs,
            ..
        } = self.extract(&doc, &snapshot.url)?;

        // Step 3: Spelling, or the accessibility failure for generic labels
        self.check_labels(&mut components).await;

        // Step 4: Re-verify alignment against the page
        self.reverify_alignment(&doc, &inputs, &components);

        // Step 5: Tab order, surfaced once on the first field
        let tab_order = TabOrderChecker::check(&doc);
        let tabulation_correct = tab_order.is_pass();
        if let Some(first) = components
            .first_mut()
            .and_then(|component| component.fields.first_mut())
        {
            first.push_test(tab_order);
        }

        // Step 6: Build the report (summary included)
        let report = Report::new(components, tabulation_correct, Utc::now(), snapshot.url);

        // Step 7: Hand it to the persistence bridge
        self.persist(&report);

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} of {} check(s) passed",
            report.summary.passed_tests, report.summary.total_tests
        ));

        Ok(&*self.current.insert(report))
    }

    /// Replaces the current report with the stored one, if the store holds
    /// a run
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or the stored run is
    /// not a valid report
    pub fn load_previous(&mut self) -> Result<Option<&Report>> {
        let Some(report) = stored_report(&self.store)? else {
            return Ok(None);
        };

        self.progress_reporter.report(&format!(
            "📂 Loaded stored results for {} ({})",
            report.url,
            report.run_date()
        ));
        Ok(Some(&*self.current.insert(report)))
    }

    fn capture(&self) -> Result<PageSnapshot> {
        self.progress_reporter.report("📖 Reading page snapshot...");
        let snapshot = self.page_source.capture()?;
        self.progress_reporter
            .report(&format!("🔎 Inspecting {}", snapshot.url));
        Ok(snapshot)
    }

    fn extract(&self, doc: &Document, url: &str) -> Result<ExtractionOutcome> {
        let extractor =
            ComponentExtractor::new(AlignmentChecker::new(self.options.alignment_tolerance));
        let outcome = extractor.extract(doc);

        for origin in &outcome.skipped_frames {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: skipped cross-origin frame ({})",
                origin
            ));
        }

        if outcome.components.is_empty() {
            return Err(AuditError::NoComponents {
                url: url.to_string(),
            }
            .into());
        }

        let field_count: usize = outcome.components.iter().map(|c| c.fields.len()).sum();
        self.progress_reporter.report(&format!(
            "✅ Found {} component(s) with {} field(s)",
            outcome.components.len(),
            field_count
        ));

        Ok(outcome)
    }

    /// One request in flight at a time; each field's outcome is isolated.
    async fn check_labels(&self, components: &mut [Component]) {
        let total: usize = components.iter().map(|c| c.fields.len()).sum();
        if total == 0 {
            return;
        }

        if self.options.spellcheck {
            self.progress_reporter.report(&format!(
                "🔤 Checking spelling of {} label(s) ({})...",
                total, self.options.language
            ));
        } else {
            self.progress_reporter.report("⏭️  Spelling check disabled");
        }

        let mut done = 0;
        for component in components.iter_mut() {
            for field in component.fields.iter_mut() {
                if GenericLabelPolicy::is_generic(&field.label) {
                    field.push_test(GenericLabelPolicy::missing_label_result());
                } else if self.options.spellcheck {
                    let result = self
                        .spell_checker
                        .check_spelling(&field.label, &self.options.language)
                        .await;
                    field.push_test(result);
                }

                done += 1;
                if self.options.spellcheck {
                    self.progress_reporter
                        .report_progress(done, total, Some(&field.label));
                }
            }
        }
    }

    /// Repeats the alignment check with the page's own label lookup
    /// (`for`, wrapping label, preceding sibling). Disagreements with the
    /// extraction result are reported, never written into the report.
    fn reverify_alignment(&self, page: &Document, inputs: &[InputLocation], components: &[Component]) {
        let checker = AlignmentChecker::new(self.options.alignment_tolerance);

        for location in inputs {
            let Some(component) = components.get(location.component) else {
                continue;
            };
            let Some(field) = component.fields.get(location.field) else {
                continue;
            };
            let Some(doc) = page.frame_document(&location.frame_path) else {
                continue;
            };

            let field_rect = doc.element(location.node).map(|e| *e.rect());
            let label_rect = LabelResolver::recheck_label_rect(page, doc, location.node);
            let recomputed = checker.check(
                field_rect.as_ref(),
                label_rect.as_ref(),
                field.element.has_accessible_description(),
            );

            let recorded = field.find_test(ALIGNMENT_TEST);
            if recorded.map(|r| r.result) != Some(recomputed.result) {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: alignment of '{}' in '{}' changed on re-check ({})",
                    field.label, component.title, recomputed.details
                ));
            }
        }
    }

    fn persist(&self, report: &Report) {
        let saved = serde_json::to_value(report)
            .map_err(anyhow::Error::from)
            .and_then(|data| self.store.handle(BridgeRequest::SaveResults { data }));

        if let Err(e) = saved {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: results were not saved: {}", e));
        }
    }
}

/// Reads the stored run through the bridge (`GET_RESULTS`)
///
/// A stored value only counts as a report when it carries `components`;
/// an empty slot answers with an empty array and yields `None`.
pub fn stored_report<RS: ResultStore>(store: &RS) -> Result<Option<Report>> {
    let response = store.handle(BridgeRequest::GetResults)?;

    match response.data {
        Some(data) if data.get("components").is_some() => Ok(Some(serde_json::from_value(data)?)),
        _ => Ok(None),
    }
}
