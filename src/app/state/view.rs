use crate::app::dual_viewport::DualViewportController;
use crate::core::{
    CameraState, InteractionEvent, InteractionHandlers, Layer, ListenerKey, RenderSurface,
    SurfaceSide,
};
use crate::shared::ViewerOptions;
use glam::DVec2;
use std::cell::Cell;
use std::rc::Rc;

/// Zuletzt gemeldete Zeigerpositionen (von den Host-Handlern geschrieben).
#[derive(Debug, Default, Clone)]
pub struct PointerReadout {
    /// Letzte Klickposition in Karteneinheiten
    pub last_click: Rc<Cell<Option<DVec2>>>,
    /// Letzte Zeigerposition in Karteneinheiten (Koordinatenanzeige)
    pub pointer: Rc<Cell<Option<DVec2>>>,
    /// Anzahl empfangener Klicks über beide Surfaces
    pub clicks: Rc<Cell<usize>>,
}

impl PointerReadout {
    /// Baut den Handler-Satz, der in die Readout-Zellen schreibt.
    pub fn handlers(&self) -> InteractionHandlers {
        let last_click = Rc::clone(&self.last_click);
        let clicks = Rc::clone(&self.clicks);
        let pointer = Rc::clone(&self.pointer);
        InteractionHandlers {
            on_click: Some(Rc::new(move |event: &InteractionEvent| {
                last_click.set(Some(event.coordinate));
                clicks.set(clicks.get() + 1);
            })),
            on_pointer_move: Some(Rc::new(move |event: &InteractionEvent| {
                pointer.set(Some(event.coordinate));
            })),
        }
    }
}

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// Primär-Surface (immer vorhanden)
    pub primary: RenderSurface,
    /// Doppelansicht inkl. Sekundär-Surface
    pub dual: DualViewportController,
    /// Handler-Satz des Hosts (wird auch an die Sekundär-Surface weitergegeben)
    pub interaction: InteractionHandlers,
    /// Ziel der Host-Handler
    pub readout: PointerReadout,
    /// Registrierungen der Host-Handler auf der Primär-Surface
    pub host_keys: Vec<ListenerKey>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::from_options(&ViewerOptions::default(), Vec::new())
    }

    /// Erstellt Primär-Surface und Doppelansicht aus den Optionen.
    pub fn from_options(options: &ViewerOptions, layers: Vec<Layer>) -> Self {
        let camera = CameraState::new(
            options.initial_center(),
            options.initial_zoom,
            options.zoom_constraints(),
        )
        .into_shared();
        let mut primary = RenderSurface::new(options.primary_target.clone(), layers, camera);
        primary.update_size(options.container_size());

        let readout = PointerReadout::default();
        let interaction = readout.handlers();
        let host_keys = interaction
            .entries()
            .into_iter()
            .map(|(kind, handler)| primary.on(kind, handler))
            .collect();

        Self {
            primary,
            dual: DualViewportController::new(options.secondary_target.clone()),
            interaction,
            readout,
            host_keys,
        }
    }

    /// Surface einer Seite (Sekundär nur bei aktiver Doppelansicht).
    pub fn surface(&self, side: SurfaceSide) -> Option<&RenderSurface> {
        self.dual.surface(&self.primary, side)
    }

    /// Surface, die Werkzeug- und TOC-Eingaben erhält.
    pub fn active_surface(&self) -> &RenderSurface {
        self.dual.active_surface(&self.primary)
    }

    /// Mutable Variante von `active_surface`.
    pub fn active_surface_mut(&mut self) -> &mut RenderSurface {
        self.dual.active_surface_mut(&mut self.primary)
    }

    /// Ändert die Kamera einer Seite und stößt die Synchronisation an.
    pub fn update_camera<F>(&mut self, side: SurfaceSide, update: F) -> bool
    where
        F: FnOnce(&mut CameraState) -> bool,
    {
        self.dual.update_camera(&self.primary, side, update)
    }

    /// Schließt die Doppelansicht und meldet die Host-Handler der
    /// Primär-Surface ab. Liefert die Anzahl abgemeldeter Handler.
    pub fn shutdown(&mut self) -> usize {
        self.dual.deactivate(&mut self.primary);
        std::mem::take(&mut self.host_keys)
            .into_iter()
            .filter(|key| self.primary.un(*key))
            .count()
    }

    /// Kopie der Kamera einer Seite.
    pub fn camera_snapshot(&self, side: SurfaceSide) -> Option<CameraState> {
        self.surface(side).map(RenderSurface::camera_snapshot)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
