use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::pagination::PaginationConfig;
use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::find_all::FindAllProductsUseCaseImpl;
use business::application::product::find_one::FindOneProductUseCaseImpl;
use business::application::product::remove::RemoveProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::database_config::StoreHandle;
use crate::rpc::product::handlers::ProductController;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_controller: Arc<ProductController>,
    pub store: StoreHandle,
}

impl DependencyContainer {
    pub fn new(store: StoreHandle, pagination: PaginationConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(store.kind());

        // Infrastructure adapters
        let product_repository = store.product_repository();

        // Product use cases; update and remove share the find-one gate
        let find_one_use_case = Arc::new(FindOneProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let find_all_use_case = Arc::new(FindAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            pagination,
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            find_one: find_one_use_case.clone(),
            logger: logger.clone(),
        });
        let remove_use_case = Arc::new(RemoveProductUseCaseImpl {
            repository: product_repository,
            find_one: find_one_use_case.clone(),
            logger,
        });

        let product_controller = Arc::new(ProductController::new(
            create_use_case,
            find_all_use_case,
            find_one_use_case,
            update_use_case,
            remove_use_case,
        ));

        Self {
            health_api,
            product_controller,
            store,
        }
    }
}
