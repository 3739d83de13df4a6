use crate::prelude::*;

// points and vectors are stored as three consecutive Float64 values, x then y then z

fn write_ascii_triples<I>(triples: I, out: &mut String)
where
    I: Iterator<Item = [f64; 3]>,
{
    array::push_separated(out, triples.flatten(), |value, out| value.push_ascii(out));
}

fn write_bytes_triples<I>(triples: I, byte_order: ByteOrder, out: &mut Vec<u8>)
where
    I: Iterator<Item = [f64; 3]>,
{
    for triple in triples {
        for component in triple {
            component.extend_bytes(byte_order, out);
        }
    }
}

impl Array for [Vector] {
    fn kind(&self) -> ArrayKind {
        ArrayKind::Vector
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn write_ascii(&self, out: &mut String) {
        write_ascii_triples(self.iter().map(Vector::to_array), out)
    }

    fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
        out.reserve(self.byte_len());
        write_bytes_triples(self.iter().map(Vector::to_array), byte_order, out)
    }
}

impl Array for [Point] {
    fn kind(&self) -> ArrayKind {
        ArrayKind::Vector
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn write_ascii(&self, out: &mut String) {
        write_ascii_triples(self.iter().map(Point::to_array), out)
    }

    fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
        out.reserve(self.byte_len());
        write_bytes_triples(self.iter().map(Point::to_array), byte_order, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vectors_flatten_into_components() {
        let vectors = vec![Vector::new(4.12, -0.68, 2.67), Vector::new(-2.65, 0.0, 1.14)];

        let mut out = String::new();
        vectors.write_ascii(&mut out);

        assert_eq!(out, "4.12 -0.68 2.67 -2.65 0.0 1.14");
    }

    #[test]
    fn points_are_24_bytes_each() {
        let points = vec![Point::new(2.0, 3.0, 0.0), Point::new(5.0, 3.0, 0.0)];

        let mut bytes = Vec::new();
        points.write_bytes(ByteOrder::LittleEndian, &mut bytes);

        assert_eq!(bytes.len(), 48);
        assert_eq!(points.byte_len(), 48);
        assert_eq!(&bytes[0..8], &2.0f64.to_le_bytes());
        assert_eq!(&bytes[8..16], &3.0f64.to_le_bytes());
        assert_eq!(&bytes[24..32], &5.0f64.to_le_bytes());
    }

    #[test]
    fn vector_kind() {
        let empty: Vec<Vector> = Vec::new();
        assert_eq!(empty.kind(), ArrayKind::Vector);
        assert_eq!(empty.components(), 3);
        assert_eq!(empty.byte_len(), 0);
    }
}
