use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::clock::Clock;
use business::domain::ingredient::draft::IngredientDraft;
use business::domain::ingredient::use_cases::classify::{
    ClassifyIngredientParams, ClassifyIngredientUseCase,
};
use business::domain::ingredient::use_cases::consume::{
    ConsumeIngredientParams, ConsumeIngredientUseCase,
};
use business::domain::ingredient::use_cases::create::CreateIngredientUseCase;
use business::domain::ingredient::use_cases::extract_label::{
    ExtractLabelParams, ExtractLabelUseCase,
};
use business::domain::ingredient::use_cases::list_active::{
    ListActiveIngredientsParams, ListActiveIngredientsUseCase,
};

use crate::api::consumption::dto::ConsumptionResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::{
    CategoryDto, ClassifyIngredientRequest, ClassifyIngredientResponse, ConsumeIngredientRequest,
    CreateIngredientRequest, ExtractLabelRequest, IngredientResponse, LabelDraftResponse,
};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    create_use_case: Arc<dyn CreateIngredientUseCase>,
    list_active_use_case: Arc<dyn ListActiveIngredientsUseCase>,
    consume_use_case: Arc<dyn ConsumeIngredientUseCase>,
    classify_use_case: Arc<dyn ClassifyIngredientUseCase>,
    extract_label_use_case: Arc<dyn ExtractLabelUseCase>,
    clock: Arc<dyn Clock>,
}

impl IngredientApi {
    pub fn new(
        create_use_case: Arc<dyn CreateIngredientUseCase>,
        list_active_use_case: Arc<dyn ListActiveIngredientsUseCase>,
        consume_use_case: Arc<dyn ConsumeIngredientUseCase>,
        classify_use_case: Arc<dyn ClassifyIngredientUseCase>,
        extract_label_use_case: Arc<dyn ExtractLabelUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            create_use_case,
            list_active_use_case,
            consume_use_case,
            classify_use_case,
            extract_label_use_case,
            clock,
        }
    }
}

/// Ingredient inventory API
///
/// Endpoints for adding ingredients, taking from them and pre-filling the
/// creation form.
#[OpenApi]
impl IngredientApi {
    /// Add an ingredient
    ///
    /// The expiry date is derived from the production date and shelf life.
    /// Without an explicit category one is suggested from the name.
    #[oai(path = "/ingredients", method = "post", tag = "ApiTags::Ingredients")]
    async fn create_ingredient(
        &self,
        auth: FirebaseBearer,
        body: Json<CreateIngredientRequest>,
    ) -> CreateIngredientResponse {
        let request = body.0;
        let mut draft = IngredientDraft::new();
        draft.set_name(request.name);
        if let Some(category) = request.category {
            draft.select_category(category.into());
        }
        draft.production_date = Some(request.production_date);
        draft.shelf_life_value = Some(request.shelf_life_value);
        if let Some(unit) = request.shelf_life_unit {
            draft.shelf_life_unit = unit.into();
        }
        draft.quantity = Some(request.initial_quantity);
        draft.quantity_unit = request.quantity_unit;

        let params = match draft.submit(auth.0) {
            Ok(params) => params,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateIngredientResponse::BadRequest(json);
            }
        };

        match self.create_use_case.execute(params).await {
            Ok(ingredient) => CreateIngredientResponse::Created(Json(
                IngredientResponse::from_domain(ingredient, self.clock.now()),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateIngredientResponse::BadRequest(json),
                    _ => CreateIngredientResponse::InternalError(json),
                }
            }
        }
    }

    /// List active ingredients
    ///
    /// Most recently added first, optionally restricted to one category.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn list_ingredients(
        &self,
        auth: FirebaseBearer,
        /// Only ingredients of this category
        category: Query<Option<CategoryDto>>,
    ) -> ListIngredientsResponse {
        let params = ListActiveIngredientsParams {
            user_id: auth.0,
            category: category.0.map(|c| c.into()),
        };

        match self.list_active_use_case.execute(params).await {
            Ok(ingredients) => {
                let now = self.clock.now();
                let responses: Vec<IngredientResponse> = ingredients
                    .into_iter()
                    .map(|i| IngredientResponse::from_domain(i, now))
                    .collect();
                ListIngredientsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Consume part of an ingredient
    ///
    /// Requests above the remaining quantity are capped. The first
    /// consumption of a day marks that day as cooked unless a status was
    /// already set.
    #[oai(
        path = "/ingredients/:id/consume",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn consume_ingredient(
        &self,
        auth: FirebaseBearer,
        id: Path<String>,
        body: Json<ConsumeIngredientRequest>,
    ) -> ConsumeIngredientResponse {
        let Ok(ingredient_id) = Uuid::parse_str(&id.0) else {
            return ConsumeIngredientResponse::BadRequest(ErrorResponse::new(
                "ValidationError",
                "ingredient.invalid_id",
            ));
        };

        let params = ConsumeIngredientParams {
            user_id: auth.0,
            ingredient_id,
            quantity: body.0.quantity,
            reason: body.0.reason.into(),
        };

        match self.consume_use_case.execute(params).await {
            Ok(record) => ConsumeIngredientResponse::Ok(Json(record.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ConsumeIngredientResponse::BadRequest(json),
                    404 => ConsumeIngredientResponse::NotFound(json),
                    _ => ConsumeIngredientResponse::InternalError(json),
                }
            }
        }
    }

    /// Suggest a category for a name
    #[oai(
        path = "/ingredients/classify",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn classify_ingredient(
        &self,
        _auth: FirebaseBearer,
        body: Json<ClassifyIngredientRequest>,
    ) -> ClassifyIngredientApiResponse {
        let category = self
            .classify_use_case
            .execute(ClassifyIngredientParams { name: body.0.name });

        ClassifyIngredientApiResponse::Ok(Json(ClassifyIngredientResponse {
            category: category.into(),
        }))
    }

    /// Read a food label photo
    ///
    /// Returns the fields that could be read, or 204 when nothing could be
    /// extracted. Manual entry is always possible.
    #[oai(
        path = "/ingredients/extract-label",
        method = "post",
        tag = "ApiTags::Ingredients"
    )]
    async fn extract_label(
        &self,
        _auth: FirebaseBearer,
        body: Json<ExtractLabelRequest>,
    ) -> ExtractLabelResponse {
        let params = ExtractLabelParams {
            image_base64: body.0.image_base64,
        };

        match self.extract_label_use_case.execute(params).await {
            Some(draft) => ExtractLabelResponse::Ok(Json(draft.into())),
            None => ExtractLabelResponse::NoContent,
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateIngredientResponse {
    #[oai(status = 201)]
    Created(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ConsumeIngredientResponse {
    #[oai(status = 200)]
    Ok(Json<ConsumptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClassifyIngredientApiResponse {
    #[oai(status = 200)]
    Ok(Json<ClassifyIngredientResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractLabelResponse {
    #[oai(status = 200)]
    Ok(Json<LabelDraftResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
}
