// ABOUTME: Routine folder tools: list, fetch, and create folders
// ABOUTME: get_routine_folder accepts folder_id as an alias for routine_folder_id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use hevy_core::constants::pagination::ROUTINE_FOLDERS;
use hevy_core::errors::ValidationError;

use crate::mcp::schema::ToolResponse;
use crate::models::{
    PageQuery, RoutineFolder, RoutineFolderDraft, RoutineFolderPayload, RoutineFoldersPage,
};
use crate::providers::{HevyApi, ProviderResult};
use crate::tools::errors::ToolFailure;
use crate::tools::pipeline::ToolPipeline;
use crate::tools::registry::ToolId;
use crate::tools::validation::{self, ToolArguments};
use crate::tools::{formatting, transforms};

/// `get_routine_folders`
pub struct GetRoutineFoldersTool;

#[async_trait]
impl ToolPipeline for GetRoutineFoldersTool {
    type Request = PageQuery;
    type Payload = PageQuery;
    type Output = RoutineFoldersPage;

    fn id(&self) -> ToolId {
        ToolId::GetRoutineFolders
    }

    fn validate(&self, args: &ToolArguments) -> Result<PageQuery, ValidationError> {
        validation::validate_pagination(args, ROUTINE_FOLDERS)
    }

    fn transform(&self, request: &PageQuery) -> PageQuery {
        *request
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        query: PageQuery,
    ) -> ProviderResult<RoutineFoldersPage> {
        api.get_routine_folders(query).await
    }

    fn format(
        &self,
        request: &PageQuery,
        output: &RoutineFoldersPage,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_folders_page(output, *request)
    }
}

/// `get_routine_folder`
pub struct GetRoutineFolderTool;

#[async_trait]
impl ToolPipeline for GetRoutineFolderTool {
    type Request = String;
    type Payload = String;
    type Output = RoutineFolder;

    fn id(&self) -> ToolId {
        ToolId::GetRoutineFolder
    }

    fn validate(&self, args: &ToolArguments) -> Result<String, ValidationError> {
        validation::validate_routine_folder_id(args)
    }

    fn transform(&self, request: &String) -> String {
        request.clone()
    }

    async fn invoke(&self, api: &dyn HevyApi, folder_id: String) -> ProviderResult<RoutineFolder> {
        api.get_routine_folder(&folder_id).await
    }

    fn format(
        &self,
        _request: &String,
        output: &RoutineFolder,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_folder_detail(output)
    }
}

/// `create_routine_folder`
pub struct CreateRoutineFolderTool;

#[async_trait]
impl ToolPipeline for CreateRoutineFolderTool {
    type Request = RoutineFolderDraft;
    type Payload = RoutineFolderPayload;
    type Output = RoutineFolder;

    fn id(&self) -> ToolId {
        ToolId::CreateRoutineFolder
    }

    fn validate(&self, args: &ToolArguments) -> Result<RoutineFolderDraft, ValidationError> {
        validation::validate_routine_folder_draft(args)
    }

    fn transform(&self, draft: &RoutineFolderDraft) -> RoutineFolderPayload {
        transforms::routine_folder_payload(draft.clone())
    }

    async fn invoke(
        &self,
        api: &dyn HevyApi,
        payload: RoutineFolderPayload,
    ) -> ProviderResult<RoutineFolder> {
        api.create_routine_folder(&payload).await
    }

    fn format(
        &self,
        draft: &RoutineFolderDraft,
        output: &RoutineFolder,
    ) -> Result<ToolResponse, ToolFailure> {
        formatting::routine_folder_created(output, &draft.title)
    }
}
