#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TileId {
    Feed,
    Friends,
    Messages,
    Groups,
    Media,
    Settings,
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TileSize {
    Small,
    Large,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Tile {
    pub(super) id: TileId,
    pub(super) label: &'static str,
    pub(super) glyph: &'static str,
    pub(super) size: TileSize,
}

pub(super) const TILES: &[Tile] = &[
    Tile {
        id: TileId::Feed,
        label: "Feed",
        glyph: "≋",
        size: TileSize::Large,
    },
    Tile {
        id: TileId::Friends,
        label: "Friends",
        glyph: "☺",
        size: TileSize::Small,
    },
    Tile {
        id: TileId::Messages,
        label: "Messages",
        glyph: "✉",
        size: TileSize::Small,
    },
    Tile {
        id: TileId::Groups,
        label: "Groups",
        glyph: "◎",
        size: TileSize::Small,
    },
    Tile {
        id: TileId::Media,
        label: "Media",
        glyph: "▣",
        size: TileSize::Small,
    },
    Tile {
        id: TileId::Settings,
        label: "Settings",
        glyph: "⚙",
        size: TileSize::Small,
    },
    Tile {
        id: TileId::Profile,
        label: "Profile",
        glyph: "♙",
        size: TileSize::Large,
    },
];

pub(super) fn tile(id: TileId) -> &'static Tile {
    TILES
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TILES[0])
}
