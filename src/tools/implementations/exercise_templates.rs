// ABOUTME: Exercise template tools: list, fetch, create custom templates, and set history
// ABOUTME: History queries enforce a strictly increasing date range before calling Hevy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Template Tools
//!
//! Built-in and custom templates share one listing; custom ones are created
//! through `create_exercise_template`. `get_exercise_history` returns every
//! logged set of one template, optionally bounded by `start_date`/`end_date`.

use async_trait::async_trait;
use hevy_core::constants::pagination::EXERCISE_TEMPLATES;
use hevy_core::errors::ValidationError;

use crate::mcp::schema::ToolResponse;
use crate::models::{
    CreatedExerciseTemplate, ExerciseHistory, ExerciseTemplate, ExerciseTemplateDraft,
    ExerciseTemplatePayload, ExerciseTemplatesPage, HistoryQuery, PageQuery,
};
use crate::providers::{HevyApi, ProviderResult};
use crate::tools::errors::ToolFailure;
use crate::tools::pipeline::ToolPipeline;
use crate::tools::registry::ToolId;
use crate::tools::validation::{self, ToolArguments};
use crate::tools::{formatting, transforms};

/// `get_exercise_templates`
pub struct GetExerciseTemplatesTool;

#[async_trait]
impl ToolPipeline for GetExerciseTemplatesTool {
    type Request = PageQuery;
    type Payload = PageQuery;
    type Output = ExerciseTemplatesPage;

    fn id(&self) -> ToolId {
        ToolId::GetExerciseTemplates
    }

    fn validate(&self, args: &ToolArguments) -> Result<PageQuery, ValidationError> {
        validation::validate_pagination(args, EXERCISE_TEMPLATES)
    }

    fn transform(&self, request: &PageQuery) -> PageQuery {
        *request
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        query: PageQuery,
    ) -> ProviderResult<ExerciseTemplatesPage> {
        api.get_exercise_templates(query).await
    }

    fn format(
        &self,
        request: &PageQuery,
        output: &ExerciseTemplatesPage,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::exercise_templates_page(output, *request)
    }
}

/// `get_exercise_template`
pub struct GetExerciseTemplateTool;

#[async_trait]
impl ToolPipeline for GetExerciseTemplateTool {
    type Request = String;
    type Payload = String;
    type Output = ExerciseTemplate;

    fn id(&self) -> ToolId {
        ToolId::GetExerciseTemplate
    }

    fn validate(&self, args: &ToolArguments) -> Result<String, ValidationError> {
        validation::validate_id(args, "exercise_template_id")
    }

    fn transform(&self, request: &String) -> String {
        request.clone()
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        template_id: String,
    ) -> ProviderResult<ExerciseTemplate> {
        api.get_exercise_template(&template_id).await
    }

    fn format(
        &self,
        _request: &String,
        output: &ExerciseTemplate,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::exercise_template_detail(output)
    }
}

/// `create_exercise_template`
pub struct CreateExerciseTemplateTool;

#[async_trait]
impl ToolPipeline for CreateExerciseTemplateTool {
    type Request = ExerciseTemplateDraft;
    type Payload = ExerciseTemplatePayload;
    type Output = CreatedExerciseTemplate;

    fn id(&self) -> ToolId {
        ToolId::CreateExerciseTemplate
    }

    fn validate(&self, args: &ToolArguments) -> Result<ExerciseTemplateDraft, ValidationError> {
        validation::validate_exercise_template_draft(args)
    }

    fn transform(&self, draft: &ExerciseTemplateDraft) -> ExerciseTemplatePayload {
        transforms::exercise_template_payload(draft.clone())
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        payload: ExerciseTemplatePayload,
    ) -> ProviderResult<CreatedExerciseTemplate> {
        api.create_exercise_template(&payload).await
    }

    fn format(
        &self,
        draft: &ExerciseTemplateDraft,
        output: &CreatedExerciseTemplate,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::exercise_template_created(output, &draft.title)
    }
}

/// `get_exercise_history`
pub struct GetExerciseHistoryTool;

#[async_trait]
impl ToolPipeline for GetExerciseHistoryTool {
    type Request = (String, HistoryQuery);
    type Payload = (String, HistoryQuery);
    type Output = ExerciseHistory;

    fn id(&self) -> ToolId {
        ToolId::GetExerciseHistory
    }

    fn validate(&self, args: &ToolArguments) -> Result<(String, HistoryQuery), ValidationError> {
        validation::validate_history_query(args)
    }

    fn transform(&self, request: &(String, HistoryQuery)) -> (String, HistoryQuery) {
        request.clone()
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        payload: (String, HistoryQuery),
    ) -> ProviderResult<ExerciseHistory> {
        let (template_id, query) = payload;
        api.get_exercise_history(&template_id, query).await
    }

    fn format(
        &self,
        _request: &(String, HistoryQuery),
        output: &ExerciseHistory,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::exercise_history(output)
    }
}
