use vector3d::{AngularUnits, Vector3D};

fn main() {
    println!("Vector3D Demonstration");
    println!("======================\n");

    let mut v = Vector3D::new(31.374, -34.234, 11.474);
    println!("Initial vector: {}", v);

    // Rescale while keeping direction
    match v.set_length(42.0) {
        Ok(()) => println!("Rescaled to 42: {}", v),
        Err(e) => println!("Rescale failed: {}", e),
    }

    let mut zero = Vector3D::default();
    if let Err(e) = zero.set_length(1.0) {
        println!("Rescaling the zero vector: {}", e);
    }

    // Angles in both units
    let a = Vector3D::new(39.216, -14.235, 42.094);
    let b = Vector3D::new(46.412, 47.500, -13.349);
    println!("\nAngle between {} and {}:", a, b);
    println!("  {:.9} rad", a.angle(b));
    println!("  {:.8} deg", a.angle_in(b, AngularUnits::Degrees));
    println!("Distance: {:.12}", a.distance(b));

    // Rotation
    let mut r = Vector3D::new(5.0, 0.0, 0.0);
    r.rotate_in((0.0, 0.0, -1.0), 90.0, AngularUnits::Degrees);
    println!("\n(5,0,0) rotated 90 deg about (0,0,-1): {}", r);

    // Degenerate division
    let nan = Vector3D::new(1.0, 2.0, 3.0) / 0.0;
    println!("\n(1,2,3) / 0: {} (is_nan = {})", nan, nan.is_nan());

    // Ordering vs equality
    let p = Vector3D::new(1.0, 0.0, 0.0);
    let q = Vector3D::new(1.0, 0.0, 1e-17);
    println!("\np == q: {}, p < q: {}", p == q, p < q);
}
