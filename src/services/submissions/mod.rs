pub mod complete;
pub mod leaderboard;
pub mod my_submissions;
pub mod pending;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::models::submissions::requests::{GradeSubmissionRequest, SubmitAssignmentRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, request, req).await
    }

    pub async fn list_pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pending::list_pending(self, request).await
    }

    pub async fn complete_assignment(
        &self,
        request: &HttpRequest,
        submission_id: ObjectId,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        complete::complete_assignment(self, request, submission_id, req).await
    }

    pub async fn list_my_submissions(
        &self,
        request: &HttpRequest,
        email: String,
    ) -> ActixResult<HttpResponse> {
        my_submissions::list_my_submissions(self, request, email).await
    }

    pub async fn leaderboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        leaderboard::leaderboard(self, request).await
    }
}
