//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, GroundProbe, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundProbe, &mut GroundContact), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, probe, mut contact) in &mut query {
        let was_supported = contact.supported;

        let probe_shape = Collider::circle(probe.radius);
        let probe_origin = transform.translation.truncate() + probe.offset;
        let hits =
            spatial_query.shape_intersections(&probe_shape, probe_origin, 0.0, &ground_filter);

        contact.supported = !hits.is_empty();

        if contact.supported != was_supported {
            debug!(
                "Ground contact changed: supported={}, probe=({:.2}, {:.2})",
                contact.supported, probe_origin.x, probe_origin.y
            );
        }
    }
}
