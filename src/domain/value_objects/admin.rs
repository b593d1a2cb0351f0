use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ContentCountsModel {
    pub courses: i64,
    pub books: i64,
    pub pyqs: i64,
    pub mock: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AdminOverviewModel {
    pub users: i64,
    pub payments: i64,
    pub revenue: i64,
    pub active_subscriptions: i64,
    pub content: ContentCountsModel,
}
