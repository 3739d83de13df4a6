use crate::prelude::*;

impl<NUM> Array for [NUM]
where
    NUM: Numeric,
{
    fn kind(&self) -> ArrayKind {
        NUM::KIND
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn write_ascii(&self, out: &mut String) {
        out.reserve(self.len() * 4);
        array::push_separated(out, self, |value, out| value.push_ascii(out));
    }

    fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
        out.reserve(self.len() * NUM::SIZE);

        for value in self {
            value.extend_bytes(byte_order, out);
        }
    }

    fn size_of_elem(&self) -> usize {
        NUM::SIZE
    }
}

impl<T> Array for Vec<T>
where
    [T]: Array,
{
    fn kind(&self) -> ArrayKind {
        self.as_slice().kind()
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn write_ascii(&self, out: &mut String) {
        self.as_slice().write_ascii(out)
    }

    fn write_bytes(&self, byte_order: ByteOrder, out: &mut Vec<u8>) {
        self.as_slice().write_bytes(byte_order, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii<A: Array + ?Sized>(array: &A) -> String {
        let mut out = String::new();
        array.write_ascii(&mut out);
        out
    }

    #[test]
    fn integers_are_space_separated() {
        assert_eq!(ascii(&vec![0i32, 1, 4]), "0 1 4");
        assert_eq!(ascii(&[-7i32][..]), "-7");
    }

    #[test]
    fn floats_keep_fractional_part() {
        assert_eq!(ascii(&vec![200.0f64, 300.0]), "200.0 300.0");
        assert_eq!(ascii(&vec![126920.01f64, -0.75]), "126920.01 -0.75");
    }

    #[test]
    fn bytes_render_as_numbers() {
        assert_eq!(ascii(&vec![5u8, 9]), "5 9");
    }

    #[test]
    fn empty_renders_nothing() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(ascii(&empty), "");
    }

    #[test]
    fn kinds_follow_element_type() {
        assert_eq!(vec![1.0f64].kind(), ArrayKind::Scalar);
        assert_eq!(vec![1i32].kind(), ArrayKind::Integer);
        assert_eq!(vec![1u8].kind(), ArrayKind::Byte);
        assert_eq!(vec![1i32, 2, 3].byte_len(), 12);
    }

    #[test]
    fn big_endian_integers() {
        let mut out = Vec::new();
        [1i32, 256].write_bytes(ByteOrder::BigEndian, &mut out);
        assert_eq!(out, vec![0, 0, 0, 1, 0, 0, 1, 0]);
    }
}
