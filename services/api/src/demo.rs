use clap::Args;
use std::sync::Arc;
use unitransfer::error::AppError;
use unitransfer::workflows::transfer::{
    AdminDashboard, Decision, Grade, InMemoryRequestStore, RequestId, RequestStore,
    RequestSubmission, StudentDashboard, TransferRequestService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the admin review portion of the walkthrough
    #[arg(long)]
    pub(crate) skip_review: bool,
}

/// End-to-end walkthrough against an in-memory store: seed, submit, review,
/// and render both role views as terminal output.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { skip_review } = args;

    println!("UniTransfer workflow demo");

    let store = Arc::new(InMemoryRequestStore::new());
    store.initialize()?;
    let service = TransferRequestService::new(store);

    let student = service.student_dashboard()?;
    render_student_dashboard(&student);

    let submission = RequestSubmission {
        university_course: "CS205 Data Structures".to_string(),
        diploma_course: "DIT210 Algorithms Fundamentals".to_string(),
        grade: Grade::AMinus,
        evidence_file_name: Some("ds_transcript.pdf".to_string()),
    };
    let submitted = service.submit(submission)?;
    println!(
        "\nSubmitted {} -> status {}",
        submitted.id,
        submitted.status.label()
    );

    if skip_review {
        return Ok(());
    }

    let admin = service.admin_dashboard()?;
    render_admin_dashboard(&admin);

    // The listing is newest-first, so the oldest pending request sits last.
    let oldest_pending = admin.pending_queue.last().map(|view| view.id.clone());
    if let Some(id) = oldest_pending {
        let decided = service.decide(&RequestId(id), Decision::Approved)?;
        println!(
            "\nApproved {} (submitted {})",
            decided.id, decided.submitted_date
        );
    }

    let refreshed = service.admin_dashboard()?;
    render_admin_dashboard(&refreshed);

    Ok(())
}

fn render_student_dashboard(dashboard: &StudentDashboard) {
    println!("\nStudent view");
    println!(
        "- {} total | {} approved | {} pending",
        dashboard.stats.total, dashboard.stats.approved, dashboard.stats.pending
    );
    for request in &dashboard.requests {
        println!(
            "- {} | {} | {} from {} | grade {} | {}",
            request.id,
            request.submitted_date,
            request.university_course,
            request.diploma_course,
            request.grade,
            request.status
        );
    }
}

fn render_admin_dashboard(dashboard: &AdminDashboard) {
    println!("\nAdmin view");
    println!(
        "- {} pending review | {}% approval rate",
        dashboard.stats.pending_count, dashboard.stats.approval_rate
    );

    if dashboard.pending_queue.is_empty() {
        println!("- Review queue: all caught up");
    } else {
        println!("- Review queue:");
        for request in &dashboard.pending_queue {
            println!(
                "  - {} | {} | grade {} | evidence {}",
                request.id, request.university_course, request.grade, request.evidence_file_name
            );
        }
    }

    if !dashboard.history.is_empty() {
        println!("- Recent history:");
        for request in &dashboard.history {
            println!(
                "  - {} | {} | {} | {}",
                request.id, request.university_course, request.status, request.submitted_date
            );
        }
    }
}
