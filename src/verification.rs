//! Credentialing seam.
//!
//! The verification-pending screen shows the review status of each
//! submitted document. In production the decision would arrive from an
//! external credentialing service; the mock exposes a manual approval
//! used by the demo's "simulate approval" control.

use serde::{Deserialize, Serialize};

use crate::models::enums::DocumentStatus;

/// One credential document under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDocument {
    pub name: String,
    pub status: DocumentStatus,
}

/// Snapshot of a doctor's credential review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewStatus {
    pub documents: Vec<ReviewDocument>,
    pub approved: bool,
}

impl ReviewStatus {
    /// Documents the doctor must re-upload.
    pub fn rejected(&self) -> Vec<&ReviewDocument> {
        self.documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Rejected)
            .collect()
    }
}

/// Source of verification decisions.
pub trait CredentialReview {
    fn status(&self) -> ReviewStatus;

    /// Re-submit a rejected document, putting it back under review.
    fn resubmit(&mut self, name: &str) -> bool;

    /// Deliver an approval decision. Returns the resulting status.
    fn approve(&mut self) -> ReviewStatus;
}

/// Mock review seeded with the demo checklist: degree and identity
/// already verified, registration pending, address proof rejected.
pub struct SimulatedReview {
    status: ReviewStatus,
}

impl SimulatedReview {
    pub fn new() -> Self {
        let documents = [
            ("Medical Degree", DocumentStatus::Verified),
            ("Registration Certificate", DocumentStatus::Pending),
            ("Identity Proof", DocumentStatus::Verified),
            ("Clinic Address Proof", DocumentStatus::Rejected),
        ]
        .into_iter()
        .map(|(name, status)| ReviewDocument {
            name: name.to_string(),
            status,
        })
        .collect();

        Self {
            status: ReviewStatus {
                documents,
                approved: false,
            },
        }
    }
}

impl Default for SimulatedReview {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialReview for SimulatedReview {
    fn status(&self) -> ReviewStatus {
        self.status.clone()
    }

    fn resubmit(&mut self, name: &str) -> bool {
        match self
            .status
            .documents
            .iter_mut()
            .find(|d| d.name == name && d.status == DocumentStatus::Rejected)
        {
            Some(doc) => {
                doc.status = DocumentStatus::Pending;
                tracing::debug!(document = name, "Document re-submitted for review");
                true
            }
            None => false,
        }
    }

    fn approve(&mut self) -> ReviewStatus {
        for doc in &mut self.status.documents {
            doc.status = DocumentStatus::Verified;
        }
        self.status.approved = true;
        tracing::info!("Credential review approved");
        self.status.clone()
    }
}
