pub mod review_api_mock;
