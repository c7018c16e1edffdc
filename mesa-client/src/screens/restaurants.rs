//! Restaurant list, filter and editor

use shared::{Restaurant, RestaurantInput};

use crate::api::RestaurantApi;
use crate::filter::RestaurantFilter;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::notice::{Notice, Notices};

pub const LOAD_FAILED: &str = "No se pudieron cargar los restaurantes";
pub const EMPTY_TEXT: &str = "No se encontraron restaurantes";
pub const CONFIRM_DELETE: &str = "¿Estás seguro de que quieres eliminar este restaurante?";

/// Create/edit form of one restaurant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantEditor {
    /// Id of the restaurant being edited; `None` creates a new one
    pub editing: Option<i64>,
    pub input: RestaurantInput,
}

impl RestaurantEditor {
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Editar Restaurante"
        } else {
            "Nuevo Restaurante"
        }
    }
}

/// Restaurant list screen
pub struct RestaurantsScreen<C = NetworkHttpClient> {
    api: RestaurantApi<C>,
    restaurants: Vec<Restaurant>,
    filter: RestaurantFilter,
    filtered: Vec<Restaurant>,
    editor: Option<RestaurantEditor>,
    loading: bool,
    notices: Notices,
}

impl<C: HttpClient> RestaurantsScreen<C> {
    pub fn new(http: C) -> Self {
        Self {
            api: RestaurantApi::new(http),
            restaurants: Vec::new(),
            filter: RestaurantFilter::default(),
            filtered: Vec::new(),
            editor: None,
            loading: false,
            notices: Notices::default(),
        }
    }

    // ========== State ==========

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurants passing the current filter, in fetch order
    pub fn filtered(&self) -> &[Restaurant] {
        &self.filtered
    }

    pub fn filter(&self) -> &RestaurantFilter {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Text shown when nothing passes the filter
    pub fn empty_text(&self) -> Option<&'static str> {
        (self.filtered.is_empty() && !self.loading).then_some(EMPTY_TEXT)
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    // ========== Filter ==========

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.refilter();
    }

    pub fn set_letter(&mut self, letter: impl Into<String>) {
        self.filter.letter = letter.into();
        self.refilter();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filter.city = city.into();
        self.refilter();
    }

    /// Select `letter`, or deselect it if already selected
    pub fn toggle_letter(&mut self, letter: &str) {
        let next = if self.filter.letter == letter { "" } else { letter };
        self.set_letter(next);
    }

    /// Select `city`, or deselect it if already selected
    pub fn toggle_city(&mut self, city: &str) {
        let next = if self.filter.city == city { "" } else { city };
        self.set_city(next);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refilter();
    }

    pub fn set_filter(&mut self, filter: RestaurantFilter) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = self.filter.apply(&self.restaurants);
    }

    // ========== Loading ==========

    /// GET /restaurantes; the list is kept on failure
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.get_all().await {
            Ok(restaurants) => {
                tracing::debug!(count = restaurants.len(), "restaurants loaded");
                self.restaurants = restaurants;
                self.refilter();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load restaurants");
                self.notices.push(Notice::error(LOAD_FAILED));
            }
        }
        self.loading = false;
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    // ========== Editor ==========

    /// Open the editor empty (`None`) or pre-filled from `restaurant`
    pub fn open_editor(&mut self, restaurant: Option<&Restaurant>) {
        self.editor = Some(match restaurant {
            Some(r) => RestaurantEditor {
                editing: Some(r.id),
                input: RestaurantInput::from(r),
            },
            None => RestaurantEditor::default(),
        });
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn editor(&self) -> Option<&RestaurantEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut RestaurantEditor> {
        self.editor.as_mut()
    }

    /// Submit the open editor. Returns whether the save succeeded.
    ///
    /// On success the editor closes and the list reloads; on failure the
    /// editor keeps its input.
    pub async fn save(&mut self) -> bool {
        let Some(editor) = self.editor.as_ref() else {
            tracing::warn!("save requested with no editor open");
            return false;
        };

        let result = match editor.editing {
            Some(id) => self
                .api
                .update(id, &editor.input)
                .await
                .map(|_| "Restaurante actualizado correctamente"),
            None => self
                .api
                .create(&editor.input)
                .await
                .map(|_| "Restaurante creado correctamente"),
        };

        match result {
            Ok(message) => {
                tracing::info!(id = ?editor.editing, name = %editor.input.name, "restaurant saved");
                self.notices.push(Notice::success(message));
                self.close_editor();
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save restaurant");
                self.notices.push(Notice::error("No se pudo guardar el restaurante"));
                false
            }
        }
    }

    /// DELETE /restaurantes/{id}, then reload
    pub async fn delete(&mut self, id: i64) -> bool {
        match self.api.delete(id).await {
            Ok(_) => {
                tracing::info!(id, "restaurant deleted");
                self.notices
                    .push(Notice::success("Restaurante eliminado correctamente"));
                self.load().await;
                true
            }
            Err(e) => {
                tracing::error!(id, error = %e, "failed to delete restaurant");
                self.notices
                    .push(Notice::error("No se pudo eliminar el restaurante"));
                false
            }
        }
    }
}
