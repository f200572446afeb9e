//! Typisierte Interaktions-Handler (Klick, Zeigerbewegung) einer Render-Surface.
//!
//! Der Host übergibt seine Handler als `InteractionHandlers`; die Surface
//! verwaltet registrierte Handler unter `ListenerKey`s, damit sie gezielt
//! wieder entfernt werden können.

use glam::DVec2;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Art eines weitergeleiteten Interaktions-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Einfacher Klick (Feature-Info, Werkzeuge)
    Click,
    /// Zeigerbewegung über der Surface
    PointerMove,
}

/// Interaktions-Event auf einer Surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEvent {
    /// Art des Events
    pub kind: InteractionKind,
    /// Position in Karteneinheiten
    pub coordinate: DVec2,
    /// Position in Pixeln relativ zur Surface
    pub pixel: DVec2,
}

impl InteractionEvent {
    /// Klick an einer Kartenposition.
    pub fn click(coordinate: DVec2, pixel: DVec2) -> Self {
        Self {
            kind: InteractionKind::Click,
            coordinate,
            pixel,
        }
    }

    /// Zeigerbewegung an einer Kartenposition.
    pub fn pointer_move(coordinate: DVec2, pixel: DVec2) -> Self {
        Self {
            kind: InteractionKind::PointerMove,
            coordinate,
            pixel,
        }
    }
}

/// Vom Host bereitgestellte Handler-Funktion (für den Kern opak).
pub type InteractionHandler = Rc<dyn Fn(&InteractionEvent)>;

/// Handler-Satz des Hosts, der auf die Sekundär-Surface übertragen wird.
#[derive(Clone, Default)]
pub struct InteractionHandlers {
    /// Klick-Handler
    pub on_click: Option<InteractionHandler>,
    /// Zeigerbewegungs-Handler
    pub on_pointer_move: Option<InteractionHandler>,
}

impl InteractionHandlers {
    /// Liefert alle gesetzten Handler mit ihrer Event-Art.
    pub fn entries(&self) -> Vec<(InteractionKind, InteractionHandler)> {
        let mut entries = Vec::with_capacity(2);
        if let Some(handler) = &self.on_click {
            entries.push((InteractionKind::Click, Rc::clone(handler)));
        }
        if let Some(handler) = &self.on_pointer_move {
            entries.push((InteractionKind::PointerMove, Rc::clone(handler)));
        }
        entries
    }

    /// Gibt `true` zurück, wenn kein Handler gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.on_click.is_none() && self.on_pointer_move.is_none()
    }
}

impl fmt::Debug for InteractionHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_pointer_move", &self.on_pointer_move.is_some())
            .finish()
    }
}

/// Schlüssel einer Handler-Registrierung (zum späteren Abmelden).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey(u64);

/// Registrierte Handler einer Surface in Registrierungsreihenfolge.
#[derive(Default)]
pub struct HandlerRegistry {
    next_key: u64,
    listeners: IndexMap<ListenerKey, (InteractionKind, InteractionHandler)>,
}

impl HandlerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Handler und liefert den Schlüssel zum Abmelden.
    pub fn register(&mut self, kind: InteractionKind, handler: InteractionHandler) -> ListenerKey {
        let key = ListenerKey(self.next_key);
        self.next_key += 1;
        self.listeners.insert(key, (kind, handler));
        key
    }

    /// Meldet einen Handler ab. Unbekannte Schlüssel werden ignoriert.
    pub fn unregister(&mut self, key: ListenerKey) -> bool {
        self.listeners.shift_remove(&key).is_some()
    }

    /// Ruft alle Handler der passenden Event-Art auf; liefert deren Anzahl.
    pub fn dispatch(&self, event: &InteractionEvent) -> usize {
        let handlers: Vec<InteractionHandler> = self
            .listeners
            .values()
            .filter(|(kind, _)| *kind == event.kind)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in &handlers {
            handler(event);
        }
        handlers.len()
    }

    /// Anzahl registrierter Handler einer Event-Art.
    pub fn count(&self, kind: InteractionKind) -> usize {
        self.listeners.values().filter(|(k, _)| *k == kind).count()
    }

    /// Gesamtzahl registrierter Handler.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Gibt `true` zurück, wenn keine Handler registriert sind.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
