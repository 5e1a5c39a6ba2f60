//! Recording test doubles for the service seams.

use std::sync::Mutex;

use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::{
    CommunicationResponse, ContactRequest, Credentials, EmailInquiry, Listing, LoginResponse, NewListing, Registration,
    Role, User,
};
use crate::state::listings::ListingFilters;
use crate::util::navigate::Launcher;

/// One observed backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(Credentials),
    Register(Registration),
    CurrentUser(String),
    Listings { token: String, filters: ListingFilters },
    CreateListing { token: String, listing: NewListing },
    RequestContact { token: String, request: ContactRequest },
    LogEmail { token: String, inquiry: EmailInquiry },
}

/// In-memory backend. Created listings are appended to the collection so a
/// follow-up fetch reflects them.
pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub listings: Mutex<Vec<Listing>>,
    pub login: Result<LoginResponse, ApiError>,
    pub register: Result<(), ApiError>,
    pub current_user: Result<User, ApiError>,
    pub listings_error: Option<ApiError>,
    pub create_error: Option<ApiError>,
    pub contact: Result<CommunicationResponse, ApiError>,
    pub email: Result<(), ApiError>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            listings: Mutex::new(Vec::new()),
            login: Err(ApiError::Unavailable),
            register: Err(ApiError::Unavailable),
            current_user: Err(ApiError::Unavailable),
            listings_error: None,
            create_error: None,
            contact: Err(ApiError::Unavailable),
            email: Err(ApiError::Unavailable),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn user(role: Role, verified: bool) -> User {
    User { id: 42, email: "agent@example.com".to_owned(), role, verified }
}

pub fn listing(id: i64, title: &str) -> Listing {
    Listing {
        id,
        title: title.to_owned(),
        price: 1_000_000.0,
        location: "Dubai Marina".to_owned(),
        description: String::new(),
        agent_id: 42,
        created_at: "2024-05-01T10:00:00Z".to_owned(),
    }
}

pub fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Status { status, message: Some(message.to_owned()) }
}

#[async_trait::async_trait(?Send)]
impl PortalApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(credentials.clone()));
        self.login.clone()
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.record(Call::Register(registration.clone()));
        self.register.clone()
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.record(Call::CurrentUser(token.to_owned()));
        self.current_user.clone()
    }

    async fn listings(&self, token: &str, filters: &ListingFilters) -> Result<Vec<Listing>, ApiError> {
        self.record(Call::Listings { token: token.to_owned(), filters: filters.clone() });
        if let Some(err) = &self.listings_error {
            return Err(err.clone());
        }
        Ok(self.listings.lock().unwrap().clone())
    }

    async fn create_listing(&self, token: &str, listing: &NewListing) -> Result<(), ApiError> {
        self.record(Call::CreateListing { token: token.to_owned(), listing: listing.clone() });
        if let Some(err) = &self.create_error {
            return Err(err.clone());
        }
        let mut stored = self.listings.lock().unwrap();
        let id = i64::try_from(stored.len()).unwrap() + 1;
        stored.push(Listing {
            id,
            title: listing.title.clone(),
            price: listing.price,
            location: listing.location.clone(),
            description: listing.description.clone(),
            agent_id: 42,
            created_at: String::new(),
        });
        Ok(())
    }

    async fn request_contact(&self, token: &str, request: &ContactRequest) -> Result<CommunicationResponse, ApiError> {
        self.record(Call::RequestContact { token: token.to_owned(), request: request.clone() });
        self.contact.clone()
    }

    async fn log_email(&self, token: &str, inquiry: &EmailInquiry) -> Result<(), ApiError> {
        self.record(Call::LogEmail { token: token.to_owned(), inquiry: inquiry.clone() });
        self.email.clone()
    }
}

/// Launcher that records URLs and optionally refuses them.
#[derive(Default)]
pub struct FakeLauncher {
    pub opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl FakeLauncher {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Launcher for FakeLauncher {
    fn open(&self, href: &str) -> Result<(), String> {
        self.opened.lock().unwrap().push(href.to_owned());
        if self.fail { Err("blocked".to_owned()) } else { Ok(()) }
    }
}
