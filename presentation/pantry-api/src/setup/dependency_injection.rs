use std::sync::Arc;

use logger::TracingLogger;
use persistence::consumption::repository::KvConsumptionRepository;
use persistence::daily_status::repository::KvDailyStatusRepository;
use persistence::ingredient::repository::KvIngredientRepository;
use persistence::kv::store::KeyValueStore;

use openai::client::OpenAIClient;
use openai::disabled::DisabledLabelExtractor;
use openai::label_extractor::LabelExtractorOpenAI;

use business::application::consumption::get_history::GetConsumptionHistoryUseCaseImpl;
use business::application::daily_status::get_today::GetTodayStatusUseCaseImpl;
use business::application::daily_status::set_status::SetDailyStatusUseCaseImpl;
use business::application::ingredient::classify::ClassifyIngredientUseCaseImpl;
use business::application::ingredient::consume::ConsumeIngredientUseCaseImpl;
use business::application::ingredient::create::CreateIngredientUseCaseImpl;
use business::application::ingredient::extract_label::ExtractLabelUseCaseImpl;
use business::application::ingredient::list_active::ListActiveIngredientsUseCaseImpl;
use business::application::stats::get_at_risk::GetAtRiskIngredientsUseCaseImpl;
use business::application::stats::summarize::SummarizeInventoryUseCaseImpl;
use business::domain::clock::{Clock, SystemClock};
use business::domain::ingredient::services::LabelExtractor;
use business::domain::logger::Logger;

use crate::api::consumption::routes::ConsumptionApi;
use crate::api::daily_status::routes::DailyStatusApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::stats::routes::StatsApi;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub ingredient_api: IngredientApi,
    pub consumption_api: ConsumptionApi,
    pub daily_status_api: DailyStatusApi,
    pub stats_api: StatsApi,
}

impl DependencyContainer {
    pub fn new(store: Arc<dyn KeyValueStore>, openai_config: &OpenAIConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let ingredient_repository = Arc::new(KvIngredientRepository::new(store.clone()));
        let consumption_repository = Arc::new(KvConsumptionRepository::new(store.clone()));
        let daily_status_repository = Arc::new(KvDailyStatusRepository::new(store));

        let label_extractor: Arc<dyn LabelExtractor> = match &openai_config.api_key {
            Some(api_key) => Arc::new(LabelExtractorOpenAI::new(OpenAIClient::new(
                api_key.clone(),
            ))),
            None => {
                tracing::warn!("OPENAI_API_KEY not set, label extraction disabled");
                Arc::new(DisabledLabelExtractor)
            }
        };

        // Ingredient use cases
        let create_use_case = Arc::new(CreateIngredientUseCaseImpl {
            repository: ingredient_repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let list_active_use_case = Arc::new(ListActiveIngredientsUseCaseImpl {
            repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let consume_use_case = Arc::new(ConsumeIngredientUseCaseImpl {
            repository: ingredient_repository.clone(),
            consumption_repository: consumption_repository.clone(),
            daily_status_repository: daily_status_repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let classify_use_case = Arc::new(ClassifyIngredientUseCaseImpl {
            logger: logger.clone(),
        });
        let extract_label_use_case = Arc::new(ExtractLabelUseCaseImpl {
            extractor: label_extractor,
            timeout: openai_config.extraction_timeout,
            logger: logger.clone(),
        });

        // Consumption use cases
        let history_use_case = Arc::new(GetConsumptionHistoryUseCaseImpl {
            repository: consumption_repository,
            logger: logger.clone(),
        });

        // Daily status use cases
        let set_status_use_case = Arc::new(SetDailyStatusUseCaseImpl {
            repository: daily_status_repository.clone(),
            logger: logger.clone(),
        });
        let get_today_use_case = Arc::new(GetTodayStatusUseCaseImpl {
            repository: daily_status_repository,
            clock: clock.clone(),
            logger: logger.clone(),
        });

        // Stats use cases
        let summarize_use_case = Arc::new(SummarizeInventoryUseCaseImpl {
            repository: ingredient_repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let at_risk_use_case = Arc::new(GetAtRiskIngredientsUseCaseImpl {
            repository: ingredient_repository,
            clock: clock.clone(),
            logger,
        });

        let ingredient_api = IngredientApi::new(
            create_use_case,
            list_active_use_case,
            consume_use_case,
            classify_use_case,
            extract_label_use_case,
            clock.clone(),
        );
        let consumption_api = ConsumptionApi::new(history_use_case);
        let daily_status_api =
            DailyStatusApi::new(set_status_use_case, get_today_use_case, clock.clone());
        let stats_api = StatsApi::new(summarize_use_case, at_risk_use_case, clock);

        Self {
            health_api,
            ingredient_api,
            consumption_api,
            daily_status_api,
            stats_api,
        }
    }
}
